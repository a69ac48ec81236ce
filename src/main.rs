use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};

use carousel::constants::*;
use carousel::testimonials::{load_testimonials, salon_testimonials};
use carousel::texture_loader::{load_gallery, load_texture_with_exif_rotation};
use carousel::viewer::{Card, CarouselEngine, FrameInput, ImageCard, TestimonialCard};
use carousel::{AspectRatio, Carousel, CarouselConfig, ImageItem};

const BACKGROUND: Color = Color::new(253, 242, 248, 255);
const TESTIMONIAL_COLUMN_WIDTH: f32 = 1100.0;
const TESTIMONIAL_CARD_HEIGHT: f32 = 480.0;

#[derive(Parser, Debug)]
#[command(name = "carousel", version, about = "Auto-advancing gallery and testimonial carousels")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Delay between automatic advances, in milliseconds
    #[arg(long, global = true)]
    interval_ms: Option<u64>,

    /// Only move when navigated manually
    #[arg(long, global = true)]
    no_autoplay: bool,

    #[arg(long, global = true)]
    no_dots: bool,

    #[arg(long, global = true)]
    no_arrows: bool,

    /// Shuffle the items before showing them
    #[arg(long, global = true)]
    shuffle: bool,

    /// Stage shape for the gallery
    #[arg(long, value_enum, global = true)]
    aspect: Option<AspectArg>,

    /// Stage height in render pixels, overrides --aspect
    #[arg(long, global = true)]
    height: Option<f32>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the pictures found in a directory
    Gallery { dir: PathBuf },
    /// Show client testimonials from a JSON file, or the built-in set
    Testimonials { file: Option<PathBuf> },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AspectArg {
    Square,
    Video,
    Wide,
    Custom,
}

impl From<AspectArg> for AspectRatio {
    fn from(arg: AspectArg) -> Self {
        match arg {
            AspectArg::Square => AspectRatio::Square,
            AspectArg::Video => AspectRatio::Video,
            AspectArg::Wide => AspectRatio::Wide,
            AspectArg::Custom => AspectRatio::Custom,
        }
    }
}

impl Cli {
    fn configure(&self, mut config: CarouselConfig) -> CarouselConfig {
        if let Some(ms) = self.interval_ms {
            config = config.with_interval(Duration::from_millis(ms));
        }
        if let Some(aspect) = self.aspect {
            config = config.with_aspect_ratio(aspect.into());
        }
        if self.height.is_some() {
            config = config.with_height(self.height);
        }
        config
            .with_auto_play(!self.no_autoplay)
            .with_dots(!self.no_dots)
            .with_arrows(!self.no_arrows)
    }

    fn arrange<T>(&self, items: &mut [T]) {
        if self.shuffle {
            items.shuffle(&mut rand::rng());
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Salon Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    match &cli.command {
        Command::Gallery { dir } => {
            let config = cli.configure(CarouselConfig::gallery().with_aspect_ratio(AspectRatio::Video));
            let mut items = load_gallery(dir).with_context(|| format!("loading gallery from {}", dir.display()))?;
            cli.arrange(&mut items);

            let mut cards = Vec::with_capacity(items.len());
            for item in items {
                match load_texture_with_exif_rotation(&mut rl, &thread, &item) {
                    Ok(texture) => cards.push(ImageCard::new(item, texture)),
                    Err(e) => warn!(error = %e, "skipping image"),
                }
            }
            info!(images = cards.len(), dir = %dir.display(), "gallery ready");

            run(&mut rl, &thread, cards, config, gallery_area())
        }
        Command::Testimonials { file } => {
            let config = cli.configure(CarouselConfig::testimonials());
            let mut testimonials = match file {
                Some(path) => load_testimonials(path)
                    .with_context(|| format!("loading testimonials from {}", path.display()))?,
                None => salon_testimonials(),
            };
            cli.arrange(&mut testimonials);

            let cards: Vec<TestimonialCard> = testimonials
                .into_iter()
                .map(|testimonial| {
                    let avatar = testimonial.avatar.as_ref().and_then(|path| {
                        load_texture_with_exif_rotation(&mut rl, &thread, &ImageItem::from_path(path))
                            .map_err(|e| warn!(error = %e, "avatar unavailable"))
                            .ok()
                    });
                    TestimonialCard::new(testimonial, avatar)
                })
                .collect();

            let config = config.with_height(cli.height.or(Some(TESTIMONIAL_CARD_HEIGHT)));
            run(&mut rl, &thread, cards, config, testimonial_area())
        }
    }
}

fn gallery_area() -> Rectangle {
    let margin_x = RENDER_WIDTH as f32 * STAGE_MARGIN;
    let margin_y = RENDER_HEIGHT as f32 * STAGE_MARGIN;
    Rectangle::new(
        margin_x,
        margin_y,
        RENDER_WIDTH as f32 - margin_x * 2.0,
        RENDER_HEIGHT as f32 - margin_y * 2.0,
    )
}

fn testimonial_area() -> Rectangle {
    let margin_y = RENDER_HEIGHT as f32 * STAGE_MARGIN;
    Rectangle::new(
        (RENDER_WIDTH as f32 - TESTIMONIAL_COLUMN_WIDTH) * 0.5,
        margin_y,
        TESTIMONIAL_COLUMN_WIDTH,
        RENDER_HEIGHT as f32 - margin_y * 2.0,
    )
}

fn run<C: Card>(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    cards: Vec<C>,
    config: CarouselConfig,
    area: Rectangle,
) -> Result<()> {
    if cards.is_empty() {
        warn!("nothing to show");
    }

    let mut carousel = Carousel::new(cards, config).context("mounting carousel")?;
    carousel.on_change(|t| info!(from = t.from, to = t.to, cause = ?t.cause, "showing item"));
    let mut engine = CarouselEngine::new(carousel, area);

    let mut framebuffer = rl
        .load_render_texture(thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("failed to create render texture: {e}"))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let input = read_input(rl);
        engine.update(dt, &input);

        // --- Render each frame into fixed size "framebuffer" ---
        rl.draw_texture_mode(thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(BACKGROUND);
            engine.draw(&mut d);
        });

        let mut d = rl.begin_drawing(thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    engine.into_carousel().unmount();
    Ok(())
}

/// Pointer and keys for this frame, mapped from window to render coordinates.
fn read_input(rl: &RaylibHandle) -> FrameInput {
    let pointer = if rl.is_cursor_on_screen() {
        let mouse = rl.get_mouse_position();
        let sx = RENDER_WIDTH as f32 / rl.get_screen_width().max(1) as f32;
        let sy = RENDER_HEIGHT as f32 / rl.get_screen_height().max(1) as f32;
        Vector2::new(mouse.x * sx, mouse.y * sy)
    } else {
        Vector2::new(-1.0, -1.0)
    };

    FrameInput {
        pointer,
        clicked: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
        previous_key: rl.is_key_pressed(KeyboardKey::KEY_LEFT),
        next_key: rl.is_key_pressed(KeyboardKey::KEY_RIGHT),
        toggle_auto_play: rl.is_key_pressed(KeyboardKey::KEY_SPACE),
    }
}
