use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use panelview::cli::{CliArgs, LayoutSource};
use panelview::config::ViewerConfig;
use panelview::messages::{LayoutMsg, Msg};
use panelview::model::AppModel;
use panelview::update::update;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    panelview::tracing::init();

    let config = ViewerConfig::load();
    let (width, height) = (config.window_width, config.window_height);
    let startup = args.into_config(&config);

    let mut model = AppModel::new(width, height, config);
    model.layout_path = startup.layout_path.clone();

    if let LayoutSource::File(path) = startup.layout_source {
        update(&mut model, Msg::Layout(LayoutMsg::Load(Some(path))));
        if let Some(status) = &model.status {
            tracing::info!("{}", status);
        }
    }

    let title = match &startup.model {
        Some(path) => {
            // Mesh import and the 3D backend live outside the layout shell
            tracing::info!("Model requested: {}", path.display());
            format!("panelview - {}", path.display())
        }
        None => "panelview".to_string(),
    };

    if startup.headless {
        if let Some(status) = &model.status {
            eprintln!("{}", status);
        }
        for line in model.layout.render_frame() {
            println!("{}", line);
        }
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(model, title);

    event_loop.run_app(&mut app)?;

    Ok(())
}
