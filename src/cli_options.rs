use std::collections::HashMap;

use geometry::options::TraceOptions;

/// Which per-vertex attributes the demo mesh carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DemoShading {
    Flat,
    Colors,
    Uv,
}

pub struct CliOptions {
    pub use_multi_thread: bool,
    pub width: u32,
    pub height: u32,
    pub output: String,
    pub skybox_dir: Option<String>,
    pub shading: DemoShading,
    pub smooth_shading: bool,
    pub ray_epsilon: Option<f32>,
    pub show_help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            use_multi_thread: true,
            width: 320,
            height: 240,
            output: String::from("output.png"),
            skybox_dir: None,
            shading: DemoShading::Colors,
            smooth_shading: false,
            ray_epsilon: None,
            show_help: false,
        }
    }
}

impl CliOptions {
    pub fn message() -> &'static str {
        r#"
        --use_multi_thread | --use_single_thread
        --width <pixels> --height <pixels>
        --output <file.png>
        --skybox <dir with px.png nx.png py.png ny.png pz.png nz.png>
        --shading flat|colors|uv
        --smooth_shading
        --epsilon <ray epsilon>
        "#
    }

    pub fn trace_options(&self) -> TraceOptions {
        let opts = TraceOptions::default().with_smooth_shading(self.smooth_shading);
        match self.ray_epsilon {
            Some(eps) => opts.with_epsilon(eps),
            None => opts,
        }
    }
}

fn required(key: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("Missing value for {}", key))
}

fn parse_dimension(key: &str, value: Option<String>) -> Result<u32, String> {
    let value = required(key, value)?;
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{} expects a positive integer, got {}", key, value)),
    }
}

pub fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut pairs: HashMap<String, Option<String>> = HashMap::new();
    let mut args = args.into_iter().rev().collect::<Vec<_>>();
    args.pop(); // Removes args[0]

    while let Some(key) = args.pop() {
        if !key.starts_with("--") {
            return Err(format!("Unrecognized key {}", key));
        }
        match args.last() {
            Some(value) if !value.starts_with("--") => {
                let value = args.pop();
                pairs.insert(key, value);
            }
            _ => {
                pairs.insert(key, None);
            }
        }
    }
    let mut options = CliOptions::default();
    for (k, v) in pairs.into_iter() {
        match k.as_str() {
            "--use_multi_thread" => options.use_multi_thread = true,
            "--use_single_thread" => options.use_multi_thread = false,
            "--width" => options.width = parse_dimension(&k, v)?,
            "--height" => options.height = parse_dimension(&k, v)?,
            "--output" => options.output = required(&k, v)?,
            "--skybox" => options.skybox_dir = Some(required(&k, v)?),
            "--shading" => {
                options.shading = match required(&k, v)?.as_str() {
                    "flat" => DemoShading::Flat,
                    "colors" => DemoShading::Colors,
                    "uv" => DemoShading::Uv,
                    other => return Err(format!("Unknown shading mode {}", other)),
                }
            }
            "--smooth_shading" => options.smooth_shading = true,
            "--epsilon" => {
                let value = required(&k, v)?;
                match value.parse::<f32>() {
                    Ok(eps) if eps > 0.0 && eps.is_finite() => options.ray_epsilon = Some(eps),
                    _ => return Err(format!("--epsilon expects a positive number, got {}", value)),
                }
            }
            "--help" => options.show_help = true,
            _ => return Err(format!("Unrecognized key {}", k)),
        }
    }
    Ok(options)
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        std::iter::once("trimesh-tracer")
            .chain(s.split_whitespace())
            .map(String::from)
            .collect()
    }

    #[test]
    fn defaults() {
        let options = parse_args(args("")).unwrap();
        assert!(options.use_multi_thread);
        assert_eq!((options.width, options.height), (320, 240));
        assert_eq!(options.shading, DemoShading::Colors);
        assert!(options.skybox_dir.is_none());
        assert_eq!(
            options.trace_options().ray_epsilon,
            geometry::options::RAY_EPSILON
        );
    }

    #[test]
    fn full_command_line() {
        let options = parse_args(args(
            "--use_single_thread --width 64 --height 48 --output a.png --skybox sky \
             --shading uv --smooth_shading --epsilon 0.001",
        ))
        .unwrap();
        assert!(!options.use_multi_thread);
        assert_eq!((options.width, options.height), (64, 48));
        assert_eq!(options.output, "a.png");
        assert_eq!(options.skybox_dir.as_deref(), Some("sky"));
        assert_eq!(options.shading, DemoShading::Uv);
        let opts = options.trace_options();
        assert!(opts.smooth_shading);
        assert_eq!(opts.ray_epsilon, 0.001);
    }

    #[test]
    fn bad_values_are_reported() {
        assert!(parse_args(args("--width 0")).is_err());
        assert!(parse_args(args("--width")).is_err());
        assert!(parse_args(args("--shading phong")).is_err());
        assert!(parse_args(args("--epsilon -1")).is_err());
        assert!(parse_args(args("--frobnicate")).is_err());
        assert!(parse_args(args("stray")).is_err());
    }
}
