//! navmesh-prep: .navm generation and inspection tool.
//!
//! Usage:
//!   navmesh-prep grid --cols 16 --rows 16 --spacing 25 --output arena.navm
//!   navmesh-prep inspect --mesh arena.navm
//!   navmesh-prep closest --mesh arena.navm --point 40,12,0
//!   navmesh-prep neighbors --mesh arena.navm --vertex 25,0,0
//!   navmesh-prep to-json --mesh arena.navm --output arena.json
//!   navmesh-prep from-json --input arena.json --output arena.navm

use std::path::{Path, PathBuf};
use std::process;

use glam::Vec3;
use tracing::{error, info};

use leadshot_navmesh::{
    grid_mesh, load_navm, write_navm, NavMeshDocument, NavMeshResult, NavigationMesh,
};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "grid" => cmd_grid(&args[2..]),
        "inspect" => cmd_inspect(&args[2..]),
        "closest" => cmd_closest(&args[2..]),
        "neighbors" => cmd_neighbors(&args[2..]),
        "to-json" => cmd_to_json(&args[2..]),
        "from-json" => cmd_from_json(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    }
}

fn print_usage() {
    eprintln!(
        "navmesh-prep: LEADSHOT navigation mesh tool\n\
         \n\
         Commands:\n\
         \n\
         grid      Generate a rectangular 4-connected waypoint grid\n\
         \n\
           --cols <N>         Columns (default: 8)\n\
           --rows <N>         Rows (default: 8)\n\
           --spacing <F>      Distance between waypoints (default: 10)\n\
           --output <path>    Output .navm file path\n\
         \n\
         inspect   Print vertex and connection counts and bounds\n\
         \n\
           --mesh <path>      .navm file to read\n\
         \n\
         closest   Find the waypoint nearest to a point\n\
         \n\
           --mesh <path>      .navm file to read\n\
           --point <x,y,z>    Query point\n\
         \n\
         neighbors List the waypoints reachable from a waypoint\n\
         \n\
           --mesh <path>      .navm file to read\n\
           --vertex <x,y,z>   Exact waypoint position\n\
         \n\
         to-json   Convert a .navm file to its JSON document form\n\
         \n\
           --mesh <path>      .navm file to read\n\
           --output <path>    Output .json path (stdout if omitted)\n\
         \n\
         from-json Convert a JSON document back to a .navm file\n\
         \n\
           --input <path>     .json document to read\n\
           --output <path>    Output .navm file path\n\
         \n\
         Set LOG_FORMAT=json for JSON logs, RUST_LOG to change the filter.\n"
    );
}

fn find_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_u32(args: &[String], flag: &str, default: u32) -> u32 {
    find_flag(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_f32(args: &[String], flag: &str, default: f32) -> f32 {
    find_flag(args, flag)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_vec3(args: &[String], flag: &str) -> Option<Vec3> {
    let parts: Vec<&str> = find_flag(args, flag)?.split(',').collect();
    if parts.len() != 3 {
        return None;
    }
    let x: f32 = parts[0].trim().parse().ok()?;
    let y: f32 = parts[1].trim().parse().ok()?;
    let z: f32 = parts[2].trim().parse().ok()?;
    Some(Vec3::new(x, y, z))
}

fn require_path(args: &[String], flag: &str) -> PathBuf {
    match find_flag(args, flag) {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("Error: {flag} <path> is required");
            process::exit(1);
        }
    }
}

fn require_vec3(args: &[String], flag: &str) -> Vec3 {
    match parse_vec3(args, flag) {
        Some(v) => v,
        None => {
            eprintln!("Error: {flag} <x,y,z> is required");
            process::exit(1);
        }
    }
}

fn load_or_exit(path: &Path) -> NavigationMesh {
    match load_navm(path) {
        Ok(mesh) => mesh,
        Err(e) => {
            error!(path = %path.display(), "failed to load navmesh: {e}");
            process::exit(1);
        }
    }
}

fn format_vec3(v: Vec3) -> String {
    format!("{},{},{}", v.x, v.y, v.z)
}

// --- Grid command ---

fn cmd_grid(args: &[String]) {
    let output = require_path(args, "--output");
    let cols = parse_u32(args, "--cols", 8);
    let rows = parse_u32(args, "--rows", 8);
    let spacing = parse_f32(args, "--spacing", 10.0);

    let mesh = match grid_mesh(cols, rows, spacing) {
        Ok(m) => m,
        Err(e) => {
            error!("failed to build grid: {e}");
            process::exit(1);
        }
    };
    info!(cols, rows, spacing, vertices = mesh.len(), "generated grid");

    if let Err(e) = write_navm(&mesh, &output) {
        error!(path = %output.display(), "failed to write navmesh: {e}");
        process::exit(1);
    }
}

// --- Inspect command ---

fn cmd_inspect(args: &[String]) {
    let path = require_path(args, "--mesh");
    let mesh = load_or_exit(&path);

    println!("vertices:    {}", mesh.len());
    println!("connections: {}", mesh.connection_count());

    if mesh.is_empty() {
        return;
    }

    let (min, max) = mesh.vertices().iter().fold(
        (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
        |(lo, hi), v| (lo.min(*v), hi.max(*v)),
    );
    let isolated = mesh.iter().filter(|(_, n)| n.is_empty()).count();
    println!("bounds:      {} .. {}", format_vec3(min), format_vec3(max));
    println!("isolated:    {isolated}");
}

// --- Query commands ---

fn cmd_closest(args: &[String]) {
    let path = require_path(args, "--mesh");
    let point = require_vec3(args, "--point");
    let mesh = load_or_exit(&path);

    match mesh.closest_vertex(point) {
        Ok(v) => println!("{}", format_vec3(v)),
        Err(e) => {
            error!("closest vertex query failed: {e}");
            process::exit(1);
        }
    }
}

fn cmd_neighbors(args: &[String]) {
    let path = require_path(args, "--mesh");
    let vertex = require_vec3(args, "--vertex");
    let mesh = load_or_exit(&path);

    match mesh.neighbors(vertex) {
        Ok(neighbors) => {
            for n in neighbors {
                println!("{}", format_vec3(n));
            }
        }
        Err(e) => {
            error!("neighbor query failed: {e}");
            process::exit(1);
        }
    }
}

// --- JSON export ---

fn cmd_to_json(args: &[String]) {
    let path = require_path(args, "--mesh");
    let mesh = load_or_exit(&path);

    let json = match mesh.to_document().to_json_pretty() {
        Ok(j) => j,
        Err(e) => {
            error!("failed to encode document: {e}");
            process::exit(1);
        }
    };

    match find_flag(args, "--output") {
        Some(out) => {
            if let Err(e) = std::fs::write(out, json) {
                error!(path = out, "failed to write document: {e}");
                process::exit(1);
            }
            info!(path = out, vertices = mesh.len(), "wrote navmesh document");
        }
        None => println!("{json}"),
    }
}

fn cmd_from_json(args: &[String]) {
    let input = require_path(args, "--input");
    let output = require_path(args, "--output");

    let text = match std::fs::read_to_string(&input) {
        Ok(t) => t,
        Err(e) => {
            error!(path = %input.display(), "failed to read document: {e}");
            process::exit(1);
        }
    };

    let mesh = match import_document(&text) {
        Ok(m) => m,
        Err(e) => {
            error!(path = %input.display(), "invalid navmesh document: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = write_navm(&mesh, &output) {
        error!(path = %output.display(), "failed to write navmesh: {e}");
        process::exit(1);
    }
}

/// Parse a JSON document and validate it into a mesh.
fn import_document(text: &str) -> NavMeshResult<NavigationMesh> {
    NavMeshDocument::from_json_str(text).and_then(NavigationMesh::from_document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_export_imports_back() {
        let mesh = grid_mesh(3, 2, 5.0).unwrap();
        let json = mesh.to_document().to_json_pretty().unwrap();

        let imported = import_document(&json).unwrap();
        assert_eq!(imported.vertices(), mesh.vertices());
        assert_eq!(imported.serialize(), mesh.serialize());
    }

    #[test]
    fn test_import_rejects_dangling_index() {
        let json = r#"{ "vertices": [[0, 0, 0]], "neighbors": [[3]] }"#;
        assert!(import_document(json).is_err());
    }

    #[test]
    fn test_import_rejects_malformed_json() {
        assert!(import_document("{ not json").is_err());
    }

    #[test]
    fn test_parse_vec3_flag() {
        let args: Vec<String> = ["--point", "1.5, -2,3"].iter().map(|s| s.to_string()).collect();
        assert_eq!(parse_vec3(&args, "--point"), Some(Vec3::new(1.5, -2.0, 3.0)));
        assert_eq!(parse_vec3(&args, "--vertex"), None);
    }
}
