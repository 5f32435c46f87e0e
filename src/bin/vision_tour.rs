use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use vision_tour::{Lesson, LessonReport, TourConfig, run_all, run_lesson};

#[derive(Parser)]
#[command(name = "vision_tour", version, about = "Image processing lessons")]
struct Cli {
    /// Directory holding the sample images (overrides VISION_TOUR_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Directory receiving the outputs (overrides VISION_TOUR_OUT_DIR)
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect an image, blur a region and add a border
    Basics,
    /// Add, blend and mask a logo onto a photo
    Arithmetics,
    /// Grayscale, binary, Otsu and adaptive thresholds
    Thresholding,
    /// Resize, rotate and warp a photo
    Geometry,
    /// Run every lesson
    All,
    /// List the lessons and their inputs
    List,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let config = TourConfig::from_env().with_overrides(cli.data_dir, cli.out_dir);

    match cli.command {
        Command::Basics => lesson_cmd(Lesson::Basics, &config),
        Command::Arithmetics => lesson_cmd(Lesson::Arithmetics, &config),
        Command::Thresholding => lesson_cmd(Lesson::Thresholding, &config),
        Command::Geometry => lesson_cmd(Lesson::Geometry, &config),
        Command::All => all_cmd(&config),
        Command::List => list_cmd(&config),
    }
}

fn print_report(report: &LessonReport) {
    for line in &report.notes {
        println!("{line}");
    }
    for path in &report.outputs {
        println!("  wrote {}", path.display());
    }
}

fn lesson_cmd(lesson: Lesson, config: &TourConfig) -> ExitCode {
    match run_lesson(lesson, config) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn all_cmd(config: &TourConfig) -> ExitCode {
    let start = Instant::now();
    let results = run_all(config);
    let elapsed = start.elapsed();

    let mut failed = 0usize;
    for (lesson, result) in &results {
        println!("== {lesson}");
        match result {
            Ok(report) => print_report(report),
            Err(err) => {
                failed += 1;
                println!("{err}");
            }
        }
    }
    println!(
        "\n{}/{} lessons succeeded ({:.2?})",
        results.len() - failed,
        results.len(),
        elapsed
    );

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn list_cmd(config: &TourConfig) -> ExitCode {
    println!("Data directory: {}", config.data_dir.display());
    println!("Output directory: {}", config.out_dir.display());
    for lesson in Lesson::ALL {
        println!("  {:<13} {}", lesson.name(), lesson.description());
    }
    ExitCode::SUCCESS
}
