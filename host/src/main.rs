use pm_prng::ParkMiller;
use squiggle::{draw_squiggle, sample, save_drawing, Colour, SampleKind, SquiggleSettings};
use std::env;
use std::time::Instant;

fn main() {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Parse CLI arguments
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "sequence" => {
            if args.len() < 3 {
                eprintln!("Usage: {} sequence <seed> [count]", args[0]);
                std::process::exit(1);
            }

            let seed = parse_seed(&args[2]);
            let count = args.get(3).map(|s| parse_count(s)).unwrap_or(10);

            sequence_command(seed, count);
        }

        "sample" => {
            if args.len() < 4 {
                eprintln!("Usage: {} sample <seed> <int|double|bool> [min max] [count]", args[0]);
                std::process::exit(1);
            }

            let seed = parse_seed(&args[2]);
            let kind: SampleKind = args[3].parse().unwrap_or_else(|e| {
                eprintln!("❌ Error: {}", e);
                std::process::exit(1);
            });

            // Bounds come in pairs; a lone trailing number is the count
            let rest = &args[4..];
            let (bounds, count_arg) = if rest.len() >= 2 {
                let min = parse_bound(&rest[0]);
                let max = parse_bound(&rest[1]);
                (Some((min, max)), rest.get(2))
            } else {
                (None, rest.first())
            };
            let count = count_arg.map(|s| parse_count(s)).unwrap_or(10);

            sample_command(seed, kind, bounds, count);
        }

        "draw" => {
            if args.len() < 3 {
                eprintln!("Usage: {} draw <seed> [--config <file>] [output_file]", args[0]);
                std::process::exit(1);
            }

            let seed = parse_seed(&args[2]);

            // Parse optional --config flag
            let mut settings = SquiggleSettings::default();
            let mut output_file_idx = 3;

            if args.len() > 3 && args[3] == "--config" {
                if args.len() < 5 {
                    eprintln!("❌ Error: --config requires a JSON settings file");
                    std::process::exit(1);
                }
                settings = SquiggleSettings::load(&args[4]).unwrap_or_else(|e| {
                    eprintln!("❌ Error loading settings: {}", e);
                    std::process::exit(1);
                });
                output_file_idx = 5;
            }

            let output_file = args.get(output_file_idx).map(|s| s.as_str());

            draw_command(seed, settings, output_file);
        }

        "colour" | "color" => {
            if args.len() < 3 {
                eprintln!("Usage: {} colour <hex>", args[0]);
                std::process::exit(1);
            }

            colour_command(&args[2]);
        }

        _ => {
            eprintln!("❌ Unknown command: {}", command);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [options]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  sequence <seed> [count]");
    eprintln!("      Print raw generator output (1..=2147483646)");
    eprintln!("      - seed: Integer in 1..=2147483646");
    eprintln!("      - count: Number of values (default: 10)");
    eprintln!();
    eprintln!("  sample <seed> <int|double|bool> [min max] [count]");
    eprintln!("      Print derived samples");
    eprintln!("      - min max: Optional inclusive (int) or half-open (double) range");
    eprintln!("      - count: Number of values (default: 10)");
    eprintln!();
    eprintln!("  draw <seed> [--config <file>] [output_file]");
    eprintln!("      Draw a random squiggle");
    eprintln!("      - --config: Optional JSON settings (width, height, margin, steps)");
    eprintln!("      - output_file: .json for strokes, .svg for a picture");
    eprintln!("                     Defaults to: <seed>_squiggle.json");
    eprintln!();
    eprintln!("  colour <hex>");
    eprintln!("      Show a colour as hex, packed integer, HSV and its inverse");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  {} sequence 1 10", program);
    eprintln!("  {} sample 42 int 0 1000 5", program);
    eprintln!("  {} draw 2918957 squiggle.svg", program);
}

fn parse_seed(arg: &str) -> u32 {
    let seed: u32 = arg.parse().unwrap_or_else(|_| {
        eprintln!("❌ Error: Invalid seed '{}'. Must be a positive integer.", arg);
        std::process::exit(1);
    });

    // Validate up front so every command reports the same message
    if let Err(e) = ParkMiller::new(seed) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }

    seed
}

fn parse_count(arg: &str) -> usize {
    arg.parse().unwrap_or_else(|_| {
        eprintln!("❌ Error: Invalid count '{}'. Must be a non-negative integer.", arg);
        std::process::exit(1);
    })
}

fn parse_bound(arg: &str) -> f64 {
    arg.parse().unwrap_or_else(|_| {
        eprintln!("❌ Error: Invalid bound '{}'. Must be a number.", arg);
        std::process::exit(1);
    })
}

fn sequence_command(seed: u32, count: usize) {
    match ParkMiller::new(seed) {
        Ok(rng) => {
            for (i, value) in rng.take(count).enumerate() {
                println!("{:>10}  {}", i + 1, value);
            }
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn sample_command(seed: u32, kind: SampleKind, bounds: Option<(f64, f64)>, count: usize) {
    match sample(seed, kind, bounds, count) {
        Ok(values) => {
            for value in values {
                println!("{}", value);
            }
        }
        Err(e) => {
            eprintln!("❌ Error sampling: {}", e);
            std::process::exit(1);
        }
    }
}

fn draw_command(seed: u32, settings: SquiggleSettings, output_file: Option<&str>) {
    println!("🎨 Drawing squiggle");
    println!("  Seed: {}", seed);
    println!("  Canvas: {}x{} (margin {})", settings.width, settings.height, settings.margin);
    println!("  Steps: {}", settings.steps);
    println!();

    let start = Instant::now();

    match draw_squiggle(seed, settings) {
        Ok(drawing) => {
            let duration = start.elapsed();
            println!("✅ Squiggle drawn in {:.3}s", duration.as_secs_f64());
            println!("  Strokes: {}", drawing.strokes.len());
            println!("  Final seed: {}", drawing.final_seed);
            println!();

            // Use default filename pattern if no output file specified
            let default_filename = format!("{}_squiggle.json", seed);
            let file_to_save = output_file.unwrap_or(&default_filename);

            match save_drawing(&drawing, file_to_save) {
                Ok(_) => println!("💾 Drawing saved to: {}", file_to_save),
                Err(e) => {
                    eprintln!("❌ Error saving drawing: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("❌ Error drawing squiggle: {}", e);
            std::process::exit(1);
        }
    }
}

fn colour_command(arg: &str) {
    let colour: Colour = arg.parse().unwrap_or_else(|e| {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    });

    let hsv = colour.to_hsv();
    let mut inverted = colour;
    inverted.invert();

    println!("  Colour: {}", colour);
    println!("  Packed: {} (0x{})", colour.to_packed(), colour.hex());
    match hsv.h {
        Some(h) => println!("  HSV: h={:.1} s={:.3} v={:.3}", h, hsv.s, hsv.v),
        None => println!("  HSV: h=- s={:.3} v={:.3}", hsv.s, hsv.v),
    }
    println!("  Inverted: {}", inverted);
}
