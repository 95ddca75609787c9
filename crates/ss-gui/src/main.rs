//! StorySwipe GUI: macroquad entry point.
//!
//! Owns the route stack and the main render loop. The virtual portrait
//! canvas (270x480) is scaled to fit the window.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ss_core::{Catalog, ContentProvider};
use ss_flow::{FlowConfig, GestureConfig, Navigator, Route, Transition};
use ss_gui::app::{AppState, Session};
use ss_gui::screen::{Screen, open};
use ss_gui::theme::text::SMALL;
use ss_gui::theme::{CANVAS_H, CANVAS_W, palette, setup_virtual_canvas};
use ss_gui::widget::label::draw_label_centered;
use ss_session::{FileStore, KeyValueStore, MemoryStore, SessionState};

#[derive(Parser, Debug)]
#[command(name = "ss-gui", about = "Swipe through bite-sized stories", version)]
struct Args {
    /// Session file
    #[arg(long, default_value = "storyswipe-session.json", env = "STORYSWIPE_STORE")]
    store: PathBuf,

    /// JSON catalog to browse instead of the built-in stories
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long)]
    memory: bool,

    /// Horizontal travel that switches story, in canvas pixels
    #[arg(long, default_value = "100")]
    swipe_distance: f32,

    /// Release speed that switches story, in canvas pixels per second
    #[arg(long, default_value = "500")]
    swipe_velocity: f32,

    /// Upward travel that opens a story
    #[arg(long, default_value = "100")]
    dive_distance: f32,

    /// Initial route, e.g. /stories
    #[arg(long, default_value = "/")]
    route: String,
}

fn open_store(args: &Args) -> Box<dyn KeyValueStore> {
    if args.memory {
        info!("session kept in memory");
        return Box::new(MemoryStore::new());
    }
    match FileStore::open(args.store.clone()) {
        Ok(store) => {
            info!(path = %store.path().display(), "session store opened");
            Box::new(store)
        }
        Err(err) => {
            error!(%err, "cannot open session store, continuing in memory");
            Box::new(MemoryStore::new())
        }
    }
}

fn load_catalog(args: &Args) -> Box<dyn ContentProvider> {
    let Some(path) = &args.catalog else {
        return Box::new(Catalog::builtin());
    };
    match Catalog::load(path) {
        Ok(catalog) => {
            info!(path = %path.display(), stories = catalog.len(), "catalog loaded");
            Box::new(catalog)
        }
        Err(err) => {
            error!(%err, "cannot load catalog, using built-in stories");
            Box::new(Catalog::builtin())
        }
    }
}

fn initial_route(path: &str) -> Route {
    Route::from_str(path).unwrap_or_else(|err| {
        warn!(%err, "starting at the landing page");
        Route::Onboarding
    })
}

/// Open the navigator's current route, recording any entry redirect.
fn open_current(navigator: &mut Navigator, app: &mut AppState) -> Box<dyn Screen> {
    let (route, screen) = open(navigator.current(), app);
    if route != navigator.current() {
        navigator.apply(Transition::Replace(route));
    }
    screen
}

fn window_conf() -> Conf {
    Conf {
        window_title: "StorySwipe".to_owned(),
        window_width: (CANVAS_W * 2.0) as i32,
        window_height: (CANVAS_H * 2.0) as i32,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ss_gui=info,ss_flow=debug,ss_session=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = FlowConfig::default().with_gesture(
        GestureConfig::default()
            .with_swipe_distance(args.swipe_distance)
            .with_swipe_velocity(args.swipe_velocity)
            .with_dive_distance(args.dive_distance),
    );
    let session: Session = SessionState::new(open_store(&args));
    let mut app = AppState::new(load_catalog(&args), session, config);

    let mut navigator = Navigator::new(initial_route(&args.route));
    let mut screen = open_current(&mut navigator, &mut app);

    loop {
        // Clear with black (letterbox bars)
        clear_background(palette::BLACK);
        setup_virtual_canvas();
        draw_rectangle(0.0, 0.0, CANVAS_W, CANVAS_H, palette::NIGHT);

        let transition = screen.update(&mut app);
        if navigator.apply(transition) {
            screen = open_current(&mut navigator, &mut app);
        }

        screen.draw(&app);

        if let Some(status) = &app.status {
            draw_label_centered(status, 0.0, CANVAS_H - 14.0, CANVAS_W, SMALL, palette::AMBER);
        }

        if app.should_quit {
            break;
        }

        next_frame().await;
    }
}
