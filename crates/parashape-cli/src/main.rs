//! parashape CLI - generate primitive shape geometry from JSON specs.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use parashape::{export, ShapeGeometry, ShapeKind, ShapeSpec, UnitSystem};

#[derive(Parser)]
#[command(name = "parashape")]
#[command(about = "Parametric primitive shape generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate geometry from a JSON shape spec and write an OBJ file
    Generate {
        /// Input JSON spec file
        input: PathBuf,
        /// Output OBJ file
        output: PathBuf,
    },
    /// Print the default JSON spec for a shape kind
    Defaults {
        /// Shape kind (see `kinds`)
        kind: String,
        /// Unit system seeding the default dimensions
        #[arg(short, long, default_value = "inches")]
        units: String,
    },
    /// Display information about a JSON shape spec
    Info {
        /// Path to the JSON spec file
        file: PathBuf,
    },
    /// List the available shape kinds
    Kinds,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output } => {
            generate(&input, &output)?;
        }
        Commands::Defaults { kind, units } => {
            show_defaults(&kind, &units)?;
        }
        Commands::Info { file } => {
            show_info(&file)?;
        }
        Commands::Kinds => {
            for kind in ShapeKind::ALL {
                println!("{}", kind);
            }
        }
    }

    Ok(())
}

fn generate(input: &PathBuf, output: &PathBuf) -> Result<()> {
    let json = fs::read_to_string(input)?;
    let spec: ShapeSpec = serde_json::from_str(&json)?;
    let geometry = spec.generate()?;
    export::write_obj(output, &geometry)?;

    match &geometry {
        ShapeGeometry::Mesh(mesh) => {
            println!(
                "Wrote {} ({} vertices, {} polygons) to {}",
                spec.kind(),
                mesh.num_points(),
                mesh.num_polygons(),
                output.display()
            );
        }
        ShapeGeometry::Polyline(points) => {
            println!(
                "Wrote {} ({} points) to {}",
                spec.kind(),
                points.len(),
                output.display()
            );
        }
    }
    Ok(())
}

fn show_defaults(kind: &str, units: &str) -> Result<()> {
    let kind: ShapeKind = kind.parse()?;
    let units = parse_units(units)?;
    let spec = ShapeSpec::defaults(kind, units.unit_length());
    println!("{}", serde_json::to_string_pretty(&spec)?);
    Ok(())
}

fn show_info(file: &PathBuf) -> Result<()> {
    let json = fs::read_to_string(file)?;
    let spec: ShapeSpec = serde_json::from_str(&json)?;

    println!("shape spec: {}", file.display());
    println!("  Kind: {}", spec.kind());
    if let Some(handedness) = spec.handedness() {
        println!("  Handedness: {:?}", handedness);
    }

    match spec.generate() {
        Ok(ShapeGeometry::Mesh(mesh)) => {
            println!("  Vertices: {}", mesh.num_points());
            println!("  Polygons: {}", mesh.num_polygons());
            println!("  Triangles: {}", mesh.count_ngons(3));
            println!("  Quads: {}", mesh.count_ngons(4));
        }
        Ok(ShapeGeometry::Polyline(points)) => {
            println!("  Polyline points: {}", points.len());
        }
        Err(e) => {
            println!("  Invalid: {}", e);
        }
    }
    Ok(())
}

fn parse_units(s: &str) -> Result<UnitSystem> {
    Ok(match s {
        "inches" | "in" => UnitSystem::Inches,
        "feet" | "ft" => UnitSystem::Feet,
        "millimeters" | "mm" => UnitSystem::Millimeters,
        "centimeters" | "cm" => UnitSystem::Centimeters,
        "meters" | "m" => UnitSystem::Meters,
        _ => anyhow::bail!("unknown unit system: {}", s),
    })
}
