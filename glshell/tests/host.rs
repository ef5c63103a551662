use {
    glshell::{Host, Lifecycle, State},
    helpers::{Call, Log, MemoryAssets, Recorder, RecordingSurface},
};

fn host(log: &Log) -> Host<Recorder, RecordingSurface> {
    Host::new(Recorder::new(log))
}

#[test]
fn forward_in_order() {
    let log = Log::new();
    let mut host = host(&log);
    host.install(RecordingSurface::new(&log));

    host.initial_setup(&MemoryAssets::new(7));
    host.surface_created();
    host.surface_changed(800, 480);
    host.draw_frame();
    host.draw_frame();
    host.surface_changed(480, 800);
    host.draw_frame();

    assert_eq!(
        log.calls(),
        [
            Call::InitialSetup { raw: 7 },
            Call::SurfaceCreated,
            Call::SurfaceChanged(800, 480),
            Call::DrawFrame,
            Call::DrawFrame,
            Call::SurfaceChanged(480, 800),
            Call::DrawFrame,
        ],
        "every event is forwarded verbatim",
    );
}

#[test]
fn initial_setup_runs_once() {
    let log = Log::new();
    let mut host = host(&log);
    let assets = MemoryAssets::new(1);
    host.initial_setup(&assets);
    host.initial_setup(&assets);
    assert_eq!(log.calls(), [Call::InitialSetup { raw: 1 }], "single setup");
}

#[test]
fn pause_without_surface() {
    let log = Log::new();
    let mut host = host(&log);

    host.paused();
    host.resumed();

    assert!(!host.is_installed(), "no surface");
    assert!(log.calls().is_empty(), "nothing is forwarded");
    assert_eq!(host.state(), State::Uninitialized, "state is unchanged");
}

#[test]
fn pause_and_resume_reach_the_surface() {
    let log = Log::new();
    let mut host = host(&log);
    host.install(RecordingSurface::new(&log));
    host.surface_created();
    log.clear();

    host.paused();
    assert_eq!(host.state(), State::Paused, "paused");

    host.resumed();
    host.resumed();
    host.resumed();
    assert_eq!(host.state(), State::SurfaceActive, "resumed");

    assert_eq!(
        log.calls(),
        [
            Call::SurfacePause,
            Call::SurfaceResume,
            Call::SurfaceResume,
            Call::SurfaceResume,
        ],
        "repeated resumes are each forwarded",
    );
}

#[test]
fn pause_is_not_a_collaborator_call() {
    let log = Log::new();
    let mut host = host(&log);
    host.install(RecordingSurface::new(&log));
    host.surface_created();
    host.paused();
    host.resumed();

    assert_eq!(log.count(&Call::SurfaceCreated), 1, "created once");
    assert_eq!(log.calls().len(), 3, "only the surface sees pause and resume");
}

#[test]
fn recreated_surface_is_forwarded_again() {
    let log = Log::new();
    let mut host = host(&log);
    host.install(RecordingSurface::new(&log));

    host.surface_created();
    host.paused();
    host.resumed();
    host.surface_created();
    host.surface_changed(1, 2);

    assert_eq!(log.count(&Call::SurfaceCreated), 2, "created twice");
    assert_eq!(host.state(), State::SurfaceActive, "active");
}
