use {
    glshell::{
        Collaborator, Config, Version,
        assets::{AssetSource, DirAssets, NoAssets},
        native,
    },
    std::{env, error, path::PathBuf, process::ExitCode},
};

type Error = Box<dyn error::Error>;

fn main() -> ExitCode {
    env_logger::init();

    let opts = match parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("args error: {err}");
            eprintln!("usage: desktop [--assume-capable] [--version <raw>] [--assets <dir>] [library]");
            return ExitCode::FAILURE;
        }
    };

    match start(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Opts {
    assume_capable: bool,
    version: Option<u32>,
    assets: Option<PathBuf>,
    library: Option<PathBuf>,
}

fn parse<I>(mut args: I) -> Result<Opts, String>
where
    I: Iterator<Item = String>,
{
    let mut opts = Opts::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--assume-capable" => opts.assume_capable = true,
            "--version" => {
                let raw = args.next().ok_or("--version needs a value")?;
                opts.version = Some(parse_version(&raw)?);
            }
            "--assets" => {
                let dir = args.next().ok_or("--assets needs a directory")?;
                opts.assets = Some(dir.into());
            }
            opt if opt.starts_with("--") => return Err(format!("undefined option {opt}")),
            _ if opts.library.is_some() => return Err(format!("unexpected argument {arg}")),
            _ => opts.library = Some(arg.into()),
        }
    }

    Ok(opts)
}

fn parse_version(raw: &str) -> Result<u32, String> {
    let parsed = match raw.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => raw.parse(),
    };

    parsed.map_err(|e| format!("invalid version {raw:?}: {e}"))
}

fn start(opts: Opts) -> Result<(), Error> {
    let mut config = Config::default()
        .with_title("glshell desktop")
        .with_assume_capable(opts.assume_capable);

    if let Some(raw) = opts.version {
        config = config.with_reported_version(Version::from_raw(raw));
    }

    let assets: Box<dyn AssetSource> = match opts.assets {
        Some(dir) => Box::new(DirAssets::new(dir)),
        None => Box::new(NoAssets),
    };

    let collaborator: Box<dyn Collaborator> = match opts.library {
        Some(path) => {
            // SAFETY: the library is expected to export the glshell C interface
            let lib = unsafe { native::Library::load(&path)? };
            Box::new(lib)
        }
        None => Box::new(Echo::default()),
    };

    let outcome = glshell_winit::run(config, collaborator, assets)?;
    if let Some(text) = outcome.text {
        println!("{text}");
    }

    Ok(())
}

/// Logs every call instead of rendering.
#[derive(Default)]
struct Echo {
    frames: u64,
}

impl Collaborator for Echo {
    fn on_initial_setup(&mut self, assets: &dyn AssetSource) {
        log::info!(
            "initial setup, shader.vert bundled: {}",
            assets.exists("shader.vert"),
        );
    }

    fn on_surface_created(&mut self) {
        log::info!("surface created");
    }

    fn on_surface_changed(&mut self, width: i32, height: i32) {
        log::info!("surface changed {width}x{height}");
    }

    fn on_draw_frame(&mut self) {
        self.frames += 1;
        if self.frames % 600 == 0 {
            log::info!("{} frames drawn", self.frames);
        }
    }

    fn query_display_string(&mut self) -> String {
        String::from("OpenGL ES 2 Rendering not supported!")
    }
}
