use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;
use strum::Display;

use surfer::{
    march::MarchSettings,
    motion::{Clock, FixedAxes, PlayerMovement, StereoRig},
    render::{ColorImage, ImageSize, RenderConfig, ThreadPool},
    uniforms::{Uniforms, View},
};

/// Renders stereo frames of an infinite field of cubes
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Name of a `.png` file to write
    ///
    /// When rendering more than one frame, the frame number is appended to
    /// the file stem.
    #[clap(short, long)]
    out: Option<PathBuf>,

    /// Width of each view, in pixels
    #[clap(long, default_value_t = 256)]
    width: u32,

    /// Height of each view, in pixels
    #[clap(long, default_value_t = 256)]
    height: u32,

    /// Number of threads to use
    #[clap(short, long)]
    threads: Option<NonZeroUsize>,

    /// Number of times to render each frame (for benchmarking)
    #[clap(short = 'N', default_value_t = NonZeroUsize::MIN)]
    n: NonZeroUsize,

    /// Number of animation frames to render
    #[clap(short, long, default_value_t = 1)]
    frames: usize,

    /// Which view(s) to write
    #[clap(long, value_enum, default_value_t = ViewMode::Both)]
    view: ViewMode,

    /// Distance between the eyes
    #[clap(long, default_value_t = 0.064)]
    ipd: f32,

    /// Steering input, in the range ±1
    #[clap(long, default_value_t = 0.0, allow_hyphen_values = true)]
    turn: f32,

    /// Throttle input, in the range ±1
    #[clap(long, default_value_t = 0.0, allow_hyphen_values = true)]
    throttle: f32,

    /// Maximum number of march steps per pixel
    #[clap(long, default_value_t = MarchSettings::default().max_steps)]
    max_steps: usize,
}

#[derive(ValueEnum, Clone, Copy, Display)]
#[strum(serialize_all = "lowercase")]
enum ViewMode {
    Left,
    Right,
    Both,
}

/// Returns the output path for a given frame
fn frame_path(out: &Path, frame: usize, frames: usize) -> PathBuf {
    if frames <= 1 {
        return out.to_owned();
    }
    let stem = out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = out
        .extension()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_owned());
    out.with_file_name(format!("{stem}_{frame:04}.{ext}"))
}

fn render_frame(
    cfg: &RenderConfig<'_>,
    uniforms: &Uniforms,
    mode: ViewMode,
) -> Result<ColorImage> {
    let image = match mode {
        ViewMode::Left => cfg.render_view(uniforms, View::Left)?,
        ViewMode::Right => cfg.render_view(uniforms, View::Right)?,
        ViewMode::Both => cfg.render_stereo(uniforms)?.side_by_side(),
    };
    Ok(image)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();

    let args = Args::parse();

    let pool: Option<ThreadPool>;
    let threads = match args.threads {
        Some(n) if n.get() == 1 => None,
        Some(n) => {
            pool = Some(ThreadPool::Custom(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n.get())
                    .build()?,
            ));
            pool.as_ref()
        }
        None => Some(&ThreadPool::Global),
    };
    let cfg = RenderConfig {
        image_size: ImageSize::new(args.width, args.height),
        threads,
        march: MarchSettings {
            max_steps: args.max_steps,
            ..Default::default()
        },
    };
    info!(
        "Rendering {} frame(s) of {} view(s) at {}x{} on {} thread(s)",
        args.frames,
        args.view,
        args.width,
        args.height,
        threads.map(|t| t.thread_count()).unwrap_or(1),
    );

    let rig = StereoRig { ipd: args.ipd };
    let mut player = PlayerMovement::new(Box::new(FixedAxes::new(
        args.turn,
        args.throttle,
    )?));
    let mut clock = Clock::default();

    for frame in 0..args.frames {
        let base = player.update()?;
        let uniforms = rig.uniforms(&base, clock.tick())?;

        let start = Instant::now();
        let mut img = render_frame(&cfg, &uniforms, args.view)?;
        for _ in 1..args.n.get() {
            img = render_frame(&cfg, &uniforms, args.view)?;
        }
        info!(
            "Rendered frame {frame} {}x at {:?} ms/frame",
            args.n,
            start.elapsed().as_micros() as f64
                / 1000.0
                / (args.n.get() as f64)
        );

        if let Some(out) = &args.out {
            let path = frame_path(out, frame, args.frames);
            info!("Writing image to {path:?}");
            let size = img.size();
            image::save_buffer(
                &path,
                &img.to_rgba_bytes(),
                size.width(),
                size.height(),
                image::ColorType::Rgba8,
            )?;
        }
    }

    Ok(())
}
