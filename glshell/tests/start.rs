use {
    glshell::{Config, Lifecycle, Presentation, Selection, Version},
    helpers::{Call, Log, MemoryAssets, Recorder, RecordingSurface},
};

#[test]
fn gpu_scenario() {
    let log = Log::new();
    let config = Config::default().with_reported_version(Version::from_raw(0x2000));
    let assets = MemoryAssets::new(0xa55e7);

    let mut built = 0;
    let presentation = glshell::start(&config, Recorder::new(&log), &assets, || {
        built += 1;
        RecordingSurface::new(&log)
    });

    assert_eq!(built, 1, "the surface is built once");
    assert_eq!(presentation.selection(), Selection::GpuSurface, "gpu");
    assert_eq!(presentation.text(), None, "no text");

    let Presentation::Gpu(mut host) = presentation else {
        panic!("expected the gpu presentation");
    };

    assert!(host.is_installed(), "surface installed");

    host.surface_created();
    host.surface_changed(800, 480);
    for _ in 0..3 {
        host.draw_frame();
    }

    assert_eq!(
        log.calls(),
        [
            Call::InitialSetup { raw: 0xa55e7 },
            Call::SurfaceCreated,
            Call::SurfaceChanged(800, 480),
            Call::DrawFrame,
            Call::DrawFrame,
            Call::DrawFrame,
        ],
        "setup, created, changed, then draws",
    );
}

#[test]
fn fallback_scenario() {
    let log = Log::new();
    let config = Config::default().with_reported_version(Version::from_raw(0x1000));
    let collaborator = Recorder::new(&log).with_text("  no GLES 2 here  ");

    let presentation = glshell::start(
        &config,
        collaborator,
        &MemoryAssets::new(3),
        || -> RecordingSurface { panic!("the fallback path must not build a surface") },
    );

    assert_eq!(presentation.selection(), Selection::FallbackText, "fallback");
    assert_eq!(
        presentation.text(),
        Some("  no GLES 2 here  "),
        "text is shown unmodified",
    );

    assert_eq!(log.count(&Call::QueryDisplayString), 1, "one query");
    assert_eq!(
        log.calls(),
        [Call::QueryDisplayString, Call::InitialSetup { raw: 3 }],
        "no surface lifecycle calls",
    );
}

#[test]
fn override_selects_the_surface() {
    let log = Log::new();
    let config = Config::default()
        .with_reported_version(Version::from_raw(0))
        .with_assume_capable(true);

    let presentation =
        glshell::start(&config, Recorder::new(&log), &MemoryAssets::default(), || {
            RecordingSurface::new(&log)
        });

    assert_eq!(presentation.selection(), Selection::GpuSurface, "gpu");
    assert_eq!(log.count(&Call::QueryDisplayString), 0, "no query");
}

#[test]
fn failed_surface_forwards_nothing() {
    let log = Log::new();
    let config = Config::default().with_reported_version(Version::new(3, 0));

    let res = glshell::try_start(
        &config,
        Recorder::new(&log),
        &MemoryAssets::default(),
        || -> Result<RecordingSurface, &'static str> { Err("no egl display") },
    );

    assert!(matches!(res, Err("no egl display")), "the error is returned");
    assert!(log.calls().is_empty(), "nothing is forwarded");
}
