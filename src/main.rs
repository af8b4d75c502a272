use std::io;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use synergy::app::App;
use synergy::config::{self, Config};
use synergy::{handlers, logging, ui};

fn main() -> Result<(), io::Error> {
    let args: Vec<String> = std::env::args().collect();

    if args.get(1).map(String::as_str) == Some("init") {
        return match Config::init() {
            Ok(true) => {
                println!(
                    "Created config file at: {}",
                    config::get_config_path().display()
                );
                Ok(())
            }
            Ok(false) => {
                println!(
                    "Config file already exists at: {}",
                    config::get_config_path().display()
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("Failed to create config file: {e}");
                Err(e)
            }
        };
    }

    let (mut config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--demo" => config.seed_demo_data = true,
            "--empty" => config.seed_demo_data = false,
            other => {
                eprintln!("Unknown argument: {other}");
                eprintln!("Usage: synergy [init | --demo | --empty]");
                return Ok(());
            }
        }
    }

    // Logging is best effort; the dashboard runs without it.
    let _log_guard = logging::init_file_logging(&config::get_log_dir(), &config.log_level).ok();
    if let Some(e) = config_error {
        warn!(error = %e, "config unreadable, using defaults");
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let _runtime_guard = runtime.enter();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: Config,
) -> io::Result<()> {
    let mut app = App::new(config);
    info!(projects = app.store.projects().len(), "dashboard started");

    loop {
        app.poll_pending();
        terminal.draw(|f| ui::render_app(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(16))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handlers::handle_key(&mut app, key);
        }

        if app.should_quit {
            break;
        }
    }

    info!("dashboard closed");
    Ok(())
}
