use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use scene_viewer::app::App;
use scene_viewer::cli::Cli;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.viewer_config()?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    println!("Scene Viewer - Controls: left drag orbit, right drag pan, wheel zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
