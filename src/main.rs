mod cli_options;
mod demo;
mod preview;

use geometry::camera::Camera;
use log::{error, info};
use math::hcm::{point3, Point3, Vec3};
use shape::Shape;
use texture::CubeMap;

use cli_options::CliOptions;

fn run(options: &CliOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = demo::build_mesh(options.shading)?;
    info!("Built {}", mesh.summary());

    let environment = match &options.skybox_dir {
        Some(dir) => Some(CubeMap::from_dir(dir)?),
        None => None,
    };

    let camera = Camera::new((options.width, options.height), 40.0).looking_at(
        point3(2.5, 2.0, -3.5),
        Point3::ORIGIN,
        Vec3::Y,
    );
    let pixels = preview::render(
        &camera,
        &mesh,
        environment.as_ref(),
        &options.trace_options(),
        options.use_multi_thread,
    )?;
    preview::write_png(&options.output, camera.resolution(), &pixels)?;
    info!("Wrote {}", options.output);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match cli_options::parse_args(std::env::args().collect()) {
        Ok(options) => options,
        Err(message) => {
            error!("{}", message);
            eprintln!("usage: {}", CliOptions::message());
            std::process::exit(2);
        }
    };
    if options.show_help {
        println!("usage: {}", CliOptions::message());
        return;
    }

    if let Err(e) = run(&options) {
        error!("{}", e);
        std::process::exit(1);
    }
}
