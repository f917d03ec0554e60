//! Command execution.

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::path::Path;

use super::{Cli, Commands, DemoArgs, DijkstraArgs, GenerateArgs, SearchArgs, ShowArgs};
use crate::config::Config;
use crate::demo::generate_demo_graph;
use crate::error::Error;
use crate::graph::{Graph, VertexId};
use crate::output::{self, OutputConfig, json as out_json};
use crate::shortest::{bellman_ford, dijkstra, dijkstra_checked};
use crate::traversal::{Bfs, Dfs, has_cycle};

/// Per-invocation state shared by the command handlers.
struct ExecContext {
    config: Config,
    output: OutputConfig,
    json: bool,
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration or graph files cannot be loaded,
    /// a vertex is unknown, or Bellman-Ford finds a negative cycle.
    pub fn execute(&self) -> Result<()> {
        let working_dir = std::env::current_dir().context("failed to get current directory")?;
        let config = Config::load_or_default(self.config.as_deref(), &working_dir)?;
        let ctx = ExecContext {
            output: OutputConfig::from_settings(&config.output),
            config,
            json: self.json,
        };

        match &self.command {
            Commands::Demo(args) => execute_demo(&ctx, args),
            Commands::Generate(args) => execute_generate(&ctx, args),
            Commands::Show(args) => execute_show(&ctx, args),
            Commands::Bfs(args) => execute_bfs(&ctx, args),
            Commands::Dfs(args) => execute_dfs(&ctx, args),
            Commands::Dijkstra(args) => execute_dijkstra(&ctx, args),
            Commands::BellmanFord(args) => execute_bellman_ford(&ctx, args),
        }
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_graph(path: &Path) -> Result<Graph> {
    Graph::load_json(path).with_context(|| format!("failed to load graph from {}", path.display()))
}

fn ensure_vertex(graph: &Graph, vertex: VertexId) -> Result<()> {
    if graph.contains_vertex(vertex) {
        Ok(())
    } else {
        Err(Error::UnknownVertex(vertex).into())
    }
}

/// Load the graph and validate source and target.
fn load_search(args: &SearchArgs) -> Result<Graph> {
    let graph = load_graph(&args.graph)?;
    ensure_vertex(&graph, args.source)?;
    if let Some(target) = args.target {
        ensure_vertex(&graph, target)?;
    }
    Ok(graph)
}

fn execute_generate(ctx: &ExecContext, args: &GenerateArgs) -> Result<()> {
    let options = args.graph.apply(ctx.config.demo);
    let graph = generate_demo_graph(&options);
    graph.save_json(&args.output)?;

    if ctx.json {
        print_json(&json!({
            "output": args.output,
            "vertices": graph.vertex_count(),
            "edges": graph.insertions().len(),
            "directed": graph.is_directed(),
        }))
    } else {
        println!(
            "Wrote graph with {} vertices and {} edges to {}",
            graph.vertex_count(),
            graph.insertions().len(),
            output::info(&args.output.display().to_string(), &ctx.output)
        );
        Ok(())
    }
}

fn execute_show(ctx: &ExecContext, args: &ShowArgs) -> Result<()> {
    let graph = load_graph(&args.graph)?;
    if ctx.json {
        print_json(&out_json::graph_json(&graph)?)
    } else {
        print!("{}", output::render_graph(&graph, &ctx.output));
        Ok(())
    }
}

fn execute_bfs(ctx: &ExecContext, args: &SearchArgs) -> Result<()> {
    let graph = load_search(args)?;
    let result = Bfs::run(&graph, args.source);

    if ctx.json {
        print_json(&out_json::bfs_json(&result, args.target))
    } else {
        print!("{}", output::section("BREADTH-FIRST SEARCH (BFS)", &ctx.output));
        print!(
            "{}",
            output::render_bfs(&graph, &result, args.target, &ctx.output)
        );
        Ok(())
    }
}

fn execute_dfs(ctx: &ExecContext, args: &SearchArgs) -> Result<()> {
    let graph = load_search(args)?;
    let result = Dfs::run(&graph, args.source);
    let cyclic = has_cycle(&graph);

    if ctx.json {
        print_json(&out_json::dfs_json(&result, cyclic, args.target))
    } else {
        print!("{}", output::section("DEPTH-FIRST SEARCH (DFS)", &ctx.output));
        print!(
            "{}",
            output::render_dfs(&graph, &result, cyclic, args.target, &ctx.output)
        );
        Ok(())
    }
}

fn execute_dijkstra(ctx: &ExecContext, args: &DijkstraArgs) -> Result<()> {
    let search = &args.search;
    let graph = load_search(search)?;
    let paths = if args.unchecked {
        tracing::warn!("Running Dijkstra without the negative-weight check");
        dijkstra(&graph, search.source)
    } else {
        dijkstra_checked(&graph, search.source)?
    };

    if ctx.json {
        return print_json(&out_json::shortest_paths_json(
            "dijkstra",
            &paths,
            search.target,
        ));
    }

    print!("{}", output::section("DIJKSTRA", &ctx.output));
    print!("{}", output::render_distances(&graph, &paths, &ctx.output));
    if let Some(target) = search.target {
        print!("{}", output::render_path(&graph, &paths, target, &ctx.output));
    }
    Ok(())
}

fn execute_bellman_ford(ctx: &ExecContext, args: &SearchArgs) -> Result<()> {
    let graph = load_search(args)?;

    let paths = match bellman_ford(&graph, args.source) {
        Ok(paths) => paths,
        Err(cycle) => {
            if ctx.json {
                print_json(&out_json::negative_cycle_json(args.source))?;
            } else {
                print!("{}", output::section("BELLMAN-FORD", &ctx.output));
                print!("{}", output::render_negative_cycle(&ctx.output));
            }
            return Err(Error::from(cycle).into());
        }
    };

    if ctx.json {
        return print_json(&out_json::shortest_paths_json(
            "bellman-ford",
            &paths,
            args.target,
        ));
    }

    print!("{}", output::section("BELLMAN-FORD", &ctx.output));
    print!("{}", output::render_distances(&graph, &paths, &ctx.output));
    if let Some(target) = args.target {
        print!("{}", output::render_path(&graph, &paths, target, &ctx.output));
    }
    Ok(())
}

fn execute_demo(ctx: &ExecContext, args: &DemoArgs) -> Result<()> {
    let options = args.graph.apply(ctx.config.demo);
    let graph = generate_demo_graph(&options);
    let source: VertexId = 0;
    ensure_vertex(&graph, source)?;
    ensure_vertex(&graph, args.target)?;

    let bfs = Bfs::run(&graph, source);
    let dfs = Dfs::run(&graph, source);
    let cyclic = has_cycle(&graph);
    let shortest = dijkstra(&graph, source);
    let negative = bellman_ford(&graph, source);

    if ctx.json {
        let bellman = match &negative {
            Ok(paths) => out_json::shortest_paths_json("bellman-ford", paths, Some(args.target)),
            Err(_) => out_json::negative_cycle_json(source),
        };
        return print_json(&json!({
            "graph": out_json::graph_json(&graph)?,
            "bfs": out_json::bfs_json(&bfs, Some(args.target)),
            "dfs": out_json::dfs_json(&dfs, cyclic, Some(args.target)),
            "dijkstra": out_json::shortest_paths_json("dijkstra", &shortest, Some(args.target)),
            "bellman_ford": bellman,
        }));
    }

    let out = &ctx.output;
    print!("{}", output::render_graph(&graph, out));
    println!();
    print!("{}", output::section("1. BFS (breadth-first search)", out));
    print!("{}", output::render_bfs(&graph, &bfs, None, out));
    println!();
    print!("{}", output::section("2. DFS (depth-first search)", out));
    print!("{}", output::render_dfs(&graph, &dfs, cyclic, None, out));
    println!();
    print!("{}", output::section("3. DIJKSTRA (non-negative weights)", out));
    print!("{}", output::render_distances(&graph, &shortest, out));
    print!("{}", output::render_path(&graph, &shortest, args.target, out));
    println!();
    print!("{}", output::section("4. BELLMAN-FORD (negative weights)", out));
    match &negative {
        Ok(paths) => {
            print!("{}", output::render_distances(&graph, paths, out));
            print!("{}", output::render_path(&graph, paths, args.target, out));
        }
        Err(_) => print!("{}", output::render_negative_cycle(out)),
    }
    println!();
    print!("{}", output::section("SUMMARY", out));
    print!("{}", output::comparison_table());
    Ok(())
}
