//! Mirror image tessellation demo
//!
//! Tessellates a bordered sprite in every partition and draw mode, sweeps
//! each fill method, and uploads the result to the GPU when one is available.

use glam::Vec2;
use mirror_mesh::{
    DrawMode, FillMethod, FillParams, Insets, MeshCache, MirrorImage, Partition, Rect,
    SourceTexture, Tessellator,
};
use mirror_mesh_wgpu::MeshBuffers;

const SPRITE_PX: f32 = 64.0;
const BORDER_PX: f32 = 12.0;
const FILL_STEPS: usize = 8;

fn sprite() -> SourceTexture {
    SourceTexture::from_pixels(
        Vec2::new(256.0, 256.0),
        Rect::from_min_size(Vec2::new(64.0, 64.0), Vec2::splat(SPRITE_PX)),
        Insets::uniform(BORDER_PX),
    )
}

fn destination() -> Rect {
    Rect::from_min_size(Vec2::ZERO, Vec2::new(320.0, 180.0))
}

/// Log vertex and triangle counts for every partition and draw mode.
fn report_draw_modes(tessellator: &mut Tessellator) {
    log::info!("Draw modes ({:?} destination):", destination().size());
    for partition in Partition::ALL {
        for draw_mode in [DrawMode::Simple, DrawMode::Sliced, DrawMode::Tiled, DrawMode::Filled] {
            let image = MirrorImage::new(sprite())
                .with_partition(partition)
                .with_draw_mode(draw_mode)
                .with_fill(FillParams::default().with_amount(0.6));
            let mesh = tessellator.tessellate(&image, destination());
            log::info!(
                "  {:<12} {:<7} {:>5} vertices {:>5} triangles",
                format!("{partition:?}"),
                format!("{draw_mode:?}"),
                mesh.vertex_count(),
                mesh.triangle_count()
            );
        }
    }
}

/// Step every fill method from empty to full through the cache.
fn report_fill_sweeps(cache: &mut MeshCache) {
    log::info!("Fill sweeps:");
    for method in [
        FillMethod::Horizontal,
        FillMethod::Vertical,
        FillMethod::Radial90,
        FillMethod::Radial180,
        FillMethod::Radial360,
    ] {
        let fill = match FillParams::new(method, 0) {
            Ok(fill) => fill,
            Err(err) => {
                log::error!("{err}");
                continue;
            }
        };
        let counts: Vec<usize> = (0..=FILL_STEPS)
            .map(|step| {
                let image = MirrorImage::new(sprite())
                    .with_partition(Partition::TopLeft)
                    .with_draw_mode(DrawMode::Filled)
                    .with_fill(fill.with_amount(step as f32 / FILL_STEPS as f32));
                cache.mesh(&image, destination()).triangle_count()
            })
            .collect();
        log::info!("  {:<10} triangles per step {:?}", format!("{method:?}"), counts);
    }
    log::info!("  {} mesh rebuilds", cache.rebuilds());
}

/// Upload one mesh to a headless device to exercise the GPU path.
async fn upload_to_gpu(image: &MirrorImage) {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

    let adapter = match instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await
    {
        Ok(adapter) => adapter,
        Err(err) => {
            log::warn!("No GPU adapter, skipping upload: {err}");
            return;
        }
    };
    log::info!("✓ Using GPU: {}", adapter.get_info().name);

    let (device, queue) = match adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("Mirror Image Device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: wgpu::MemoryHints::default(),
            experimental_features: wgpu::ExperimentalFeatures::default(),
            trace: wgpu::Trace::Off,
        })
        .await
    {
        Ok(pair) => pair,
        Err(err) => {
            log::warn!("Failed to create device, skipping upload: {err}");
            return;
        }
    };

    let mut tessellator = Tessellator::new();
    let mesh = tessellator.tessellate(image, destination());
    let mut buffers = MeshBuffers::new(&device);
    buffers.upload(&device, &queue, mesh);
    queue.submit(std::iter::empty());

    log::info!("✓ Uploaded {} indices", buffers.index_count());
}

fn main() {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting mirror image tessellation demo...");

    let mut tessellator = Tessellator::new();
    report_draw_modes(&mut tessellator);

    let mut cache = MeshCache::new();
    report_fill_sweeps(&mut cache);

    let tiled = MirrorImage::new(sprite())
        .with_partition(Partition::BottomRight)
        .with_draw_mode(DrawMode::Tiled)
        .with_pixels_per_unit(8.0);
    pollster::block_on(upload_to_gpu(&tiled));
}
