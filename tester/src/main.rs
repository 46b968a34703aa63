use std::{path::PathBuf, time::Duration};

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use client::{
    RevealConfig, Shell,
    reveal::motion::{Acceleration, MotionCapability},
    source::RemoteSource,
    store::FileStore,
};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Gesture {
    Scratch,
    Shake,
}

/// Plays one card against a running jokes server and reveals it with a scripted gesture.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value = "http://localhost:3000")]
    server: String,

    #[arg(long, value_enum, default_value_t = Gesture::Scratch)]
    gesture: Gesture,

    /// Category to select before loading.
    #[arg(long)]
    category: Option<String>,

    /// Cards to skip before playing.
    #[arg(long, default_value_t = 0)]
    skip: usize,

    /// Where preferences are kept between runs.
    #[arg(long, default_value = "tester-store.json")]
    store: PathBuf,

    /// Like the card once it is revealed.
    #[arg(long)]
    like: bool,
}

const SURFACE: f64 = 300.0;

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();

    let store = FileStore::open(&args.store)?;
    let mut shell = Shell::new(store, RevealConfig::load()?, MotionCapability::Available);

    if let Some(category) = &args.category {
        shell.clear_categories();
        shell.toggle_category(category);
    }

    shell.load(&RemoteSource::new(&args.server)).await;

    if let Some(error) = shell.error() {
        bail!("{error}");
    }

    for _ in 0..args.skip {
        shell.next();
    }

    let Some(joke) = shell.current().cloned() else {
        println!("No jokes in {:?}", shell.selected_categories());
        return Ok(());
    };

    println!("[{}] {}", joke.category, joke.setup);

    match args.gesture {
        Gesture::Scratch => scratch(&mut shell),
        Gesture::Shake => shake(&mut shell),
    }

    match shell.punchline() {
        Some(punchline) => println!("{punchline}"),
        None => bail!("Card never revealed at {:.0}%", shell.reveal_progress()),
    }

    if args.like {
        let liked = shell.toggle_like();
        println!("{}", if liked { "Liked" } else { "Unliked" });
    }

    Ok(())
}

/// Drags across the surface row by row, one pointer move per cell.
fn scratch(shell: &mut Shell<FileStore>) {
    let cells = shell.reveal_config().grid_size;
    let step = SURFACE / cells as f64;

    shell.start_scratch();
    'rows: for row in 0..cells {
        for column in 0..cells {
            let x = (column as f64 + 0.5) * step;
            let y = (row as f64 + 0.5) * step;

            if shell.scratch_move(x, y, SURFACE, SURFACE) {
                println!("Scratched {:>3.0}%", shell.reveal_state().scratch_progress);
            }

            if shell.reveal_state().revealed {
                break 'rows;
            }
        }
    }
    shell.end_scratch();
}

/// Shakes back and forth, one sample every half second of simulated time.
fn shake(shell: &mut Shell<FileStore>) {
    let mut now = Duration::ZERO;

    while !shell.reveal_state().revealed && now < Duration::from_secs(30) {
        now += Duration::from_millis(500);

        let reading = if now.as_millis() % 1000 == 0 { -5.0 } else { 5.0 };
        let acceleration = Acceleration::new(reading, reading, reading);
        let Some(shake) = shell.motion_sample(acceleration, now) else {
            continue;
        };

        if shake.counted {
            println!("Shake ({:.0}) {:>3.0}%", shake.impulse, shell.reveal_progress());
        }
    }
}
