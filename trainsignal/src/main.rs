extern crate trainsignal;
extern crate failure;
extern crate structopt;
extern crate env_logger;
extern crate log;

use log::LevelFilter;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use structopt::StructOpt;
use trainsignal::input::command::{Command, CommandParser, HELP};
use trainsignal::output::render::render;
use trainsignal::*;

/// Train signal system -- build a track map and run a train along it
#[derive(StructOpt, Debug)]
#[structopt(name = "trainsignal")]
struct Opt {
    /// Verbose mode (-v, -vv, -vvv)
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,

    /// Grid size for the track map (N x N, 1 to 20)
    #[structopt(short = "n", long = "size", default_value = "10")]
    size: i32,

    /// Command script to run instead of reading from stdin
    #[structopt(short = "s", long = "script", parse(from_os_str))]
    script: Option<PathBuf>,

    /// Load the preset sample map before reading commands
    #[structopt(short = "p", long = "preset")]
    preset: bool,

    /// Pause between animation frames, in milliseconds
    #[structopt(short = "d", long = "frame-delay", default_value = "500")]
    frame_delay: u64,
}

enum Flow {
    Continue,
    Quit,
}

fn draw(grid: &Grid) {
    println!("{}", grid);
}

fn run_train(grid: &mut Grid, opt: &Opt) -> AppResult<()> {
    if let Err(fault) = grid.validate() {
        println!("Map is not valid: {}", fault);
        return Ok(());
    }
    let path = match grid.find_path() {
        Some(path) => path,
        None => {
            println!("No route from the beginning point to the end point");
            draw(grid);
            return Ok(());
        }
    };
    println!("Route found: {}", path);
    for frame in grid.drive(&path.moves)? {
        let frame = frame?;
        match frame.step {
            Some(step) => println!("Train {} -> {}", step, frame.train.position()),
            None => println!("Train departs from {}", frame.train.position()),
        }
        println!("{}", render(grid, Some(&frame.train)));
        if opt.frame_delay > 0 {
            thread::sleep(Duration::from_millis(opt.frame_delay));
        }
    }
    println!("Train arrived at the end point");
    Ok(())
}

fn execute(grid: &mut Grid, cmd: &Command, opt: &Opt) -> AppResult<Flow> {
    match *cmd {
        Command::Start(x, y) => grid.place_start(x, y)?,
        Command::End(x, y) => grid.place_end(x, y)?,
        Command::Track(x, y) => grid.place_track(x, y)?,
        Command::Signal(x, y, ref state) => grid.place_signal(x, y, state)?,
        Command::Junction(x, y, ref direction) => grid.place_junction(x, y, direction)?,
        Command::Remove(x, y) => {
            if grid.remove(x, y)?.is_none() {
                println!("Nothing to remove at ({}, {})", x, y);
            }
        }
        Command::Preset => grid.load_preset()?,
        Command::Validate => {
            match grid.validate() {
                Ok(()) => println!("Map is valid"),
                Err(fault) => println!("Map is not valid: {}", fault),
            }
            return Ok(Flow::Continue);
        }
        Command::Clear => grid.clear(),
        Command::Map => {}
        Command::Run => {
            run_train(grid, opt)?;
            return Ok(Flow::Continue);
        }
        Command::Help => {
            println!("{}", HELP);
            return Ok(Flow::Continue);
        }
        Command::Quit => {
            println!("Quitting the train signal system");
            return Ok(Flow::Quit);
        }
    }
    draw(grid);
    Ok(Flow::Continue)
}

fn run(opt: &Opt) -> AppResult<()> {
    let mut grid = Grid::new(opt.size)?;
    println!("System builder created - map size {} x {}", opt.size, opt.size);
    println!("Origin (0, 0) is at the TOP LEFT corner - all values are positive");
    if opt.preset {
        grid.load_preset()?;
    }
    draw(&grid);

    if let Some(ref script) = opt.script {
        for cmd in get_commands(script)? {
            match execute(&mut grid, &cmd, opt) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => println!("Error in {:?}: {}", cmd, e),
            }
        }
        return Ok(());
    }

    println!("{}", HELP);
    let parser = CommandParser::new()?;
    let stdin = io::stdin();
    loop {
        print!("--> Enter a command for the train signal system: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let cmd = match parser.parse_line(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                println!("{} - press 'H' for command help", e);
                continue;
            }
        };
        match execute(&mut grid, &cmd, opt) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => println!("Error: {}", e),
        }
    }
    Ok(())
}

pub fn main() {
    let opt = Opt::from_args();
    let level = match opt.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match run(&opt) {
        Ok(()) => {},
        Err(e) => {
            println!("Error:\n{}", e);
            std::process::exit(1);
        },
    }
}
