//! bez-path: Kommandozeile für Bézier-/Polylinien-Pfade.
//!
//! Liest einen Pfad in Textform (Datei, `--eval` oder stdin) und gibt
//! Längen, Lookup-Table-Abfragen, Unterteilungen, Segmente, normalisierte
//! Koordinaten oder die Bounding-Box aus.

use std::io::Read as _;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use bez_path::geometry::{accurate_length, quick_length, segment, subdivide_path, LookupTable};
use bez_path::{
    normalized_path, parse_path, BoundingBox, ElementKind, GeometryOptions, Path, PathElement, Point,
};

#[derive(Parser)]
#[command(version, about = "Bézier-/Polylinien-Pfade auswerten und umformen")]
struct Cli {
    /// Pfad-Datei in Textform (ohne Datei und --eval: stdin)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Pfad direkt als Text übergeben
    #[arg(short = 'e', long = "eval", global = true, conflicts_with = "file")]
    eval: Option<String>,

    /// Optionen-Datei (TOML); Standard: bez_path.toml neben der Binary
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Ausgabe als JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Schnelle Länge je Element, Gesamtlänge und genaue Länge je Kurve
    Lengths,
    /// Größe und optional Punkte der Lookup-Table
    Lut {
        /// Alle Stützpunkte ausgeben
        #[arg(long)]
        points: bool,
    },
    /// Nächstgelegener Pfadpunkt und relative Position
    #[command(allow_negative_numbers = true)]
    Closest { x: f32, y: f32 },
    /// Jedes Element in n Teile zerlegen
    Subdivide {
        /// Teile pro Element (Standard aus den Optionen)
        n: Option<usize>,
    },
    /// Teilkurve eines Elements über [from, to]
    Segment { index: usize, from: f32, to: f32 },
    /// Punkte auf [0, 1] normalisieren und mit Breite/Höhe skalieren
    Normalize { width: f32, height: f32 },
    /// Bounding-Box über Steuerpunkte und über die Kurve
    Bounds,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(GeometryOptions::config_path);
    let options = GeometryOptions::load_from_file(&config_path);
    let path = read_path(&cli)?;

    log::debug!("{} Elemente eingelesen", path.len());
    run(&cli, &path, &options)
}

fn read_path(cli: &Cli) -> Result<Path> {
    let text = match (&cli.eval, &cli.file) {
        (Some(text), _) => text.clone(),
        (None, Some(file)) => std::fs::read_to_string(file)
            .with_context(|| format!("Pfad-Datei nicht lesbar: {}", file.display()))?,
        (None, None) => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Pfad von stdin nicht lesbar")?;
            text
        }
    };
    parse_path(&text).context("Pfad-Text ungültig")
}

// ── Ausgabe-Typen ──────────────────────────────────────────────────

#[derive(Serialize)]
struct ElementLength {
    index: usize,
    command: char,
    quick: f64,
    /// `None`, wenn die Integration nicht konvergiert
    accurate: Option<f64>,
}

#[derive(Serialize)]
struct LengthReport {
    elements: Vec<ElementLength>,
    total_quick: f64,
}

#[derive(Serialize)]
struct LutReport {
    len: usize,
    points: Option<Vec<[f32; 2]>>,
}

#[derive(Serialize)]
struct ClosestReport {
    point: Option<[f32; 2]>,
    percent: f32,
}

#[derive(Serialize)]
struct BoundsReport {
    control_points: Option<[[f32; 2]; 2]>,
    curve: Option<[[f32; 2]; 2]>,
}

fn xy(p: Point) -> [f32; 2] {
    [p.x, p.y]
}

fn corners(bounds: Option<BoundingBox>) -> Option<[[f32; 2]; 2]> {
    bounds.map(|b| [xy(b.min), xy(b.max)])
}

fn print_json(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: &Cli, path: &Path, options: &GeometryOptions) -> Result<()> {
    match &cli.command {
        Command::Lengths => {
            let elements: Vec<ElementLength> = path
                .segments()
                .enumerate()
                .map(|(index, seg)| {
                    let accurate = accurate_length(&seg, 0.0, 1.0, &options.quadrature)
                        .map_err(|e| log::warn!("Element {index}: {e}"))
                        .ok();
                    ElementLength {
                        index,
                        command: seg.element.kind().command(),
                        quick: quick_length(&seg),
                        accurate,
                    }
                })
                .collect();
            let total_quick = elements.iter().map(|e| e.quick).sum();
            let report = LengthReport {
                elements,
                total_quick,
            };

            if cli.json {
                return print_json(&report);
            }
            for e in &report.elements {
                let accurate = e
                    .accurate
                    .map_or_else(|| "unbekannt".to_string(), |v| format!("{v:.6}"));
                println!("{:>4} {} schnell={:.6} genau={}", e.index, e.command, e.quick, accurate);
            }
            println!("gesamt {:.6}", report.total_quick);
        }
        Command::Lut { points } => {
            let table = LookupTable::build(path, &options.lookup_table);
            let report = LutReport {
                len: table.len(),
                points: points.then(|| table.points().iter().copied().map(xy).collect()),
            };

            if cli.json {
                return print_json(&report);
            }
            println!("{}", report.len);
            for [x, y] in report.points.iter().flatten() {
                println!("{x} {y}");
            }
        }
        Command::Closest { x, y } => {
            let table = LookupTable::build(path, &options.lookup_table);
            let query = Point::new(*x, *y);
            let report = ClosestReport {
                point: table.closest_point(query).map(xy),
                percent: table.percent(query),
            };

            if cli.json {
                return print_json(&report);
            }
            match report.point {
                Some([px, py]) => println!("{px} {py} {}", report.percent),
                None => bail!("Lookup-Table ist leer (Pfadlänge 0)"),
            }
        }
        Command::Subdivide { n } => {
            let n = n.unwrap_or(options.subdivision_segments);
            let subdivided = Path::from_elements(subdivide_path(path.elements(), n));
            print_path(cli, &subdivided)?;
        }
        Command::Segment { index, from, to } => {
            if !(0.0..=1.0).contains(from) || !(0.0..=1.0).contains(to) || from >= to {
                bail!("Ungültiger Bereich [{from}, {to}]: erwartet 0 <= from < to <= 1");
            }
            let Some(seg) = path.segments().nth(*index) else {
                bail!("Element {index} existiert nicht (Pfad hat {} Elemente)", path.len());
            };
            let element = segment(&seg, *from, *to);
            // Eigenständig zeichenbar: Teilkurve beginnt mit MoveTo an B(from)
            let mut piece = Path::new();
            if element.kind() != ElementKind::MoveTo {
                piece.push(PathElement::MoveTo(seg.point_at(*from)));
            }
            piece.push(element);
            print_path(cli, &piece)?;
        }
        Command::Normalize { width, height } => {
            print_path(cli, &normalized_path(path, *width, *height))?;
        }
        Command::Bounds => {
            let report = BoundsReport {
                control_points: corners(BoundingBox::from_path(path)),
                curve: corners(BoundingBox::from_samples(path)),
            };

            if cli.json {
                return print_json(&report);
            }
            let Some([min, max]) = report.curve else {
                bail!("Pfad ist leer");
            };
            println!("{} {} {} {}", min[0], min[1], max[0], max[1]);
        }
    }
    Ok(())
}

fn print_path(cli: &Cli, path: &Path) -> Result<()> {
    if cli.json {
        return print_json(path);
    }
    print!("{path}");
    Ok(())
}
