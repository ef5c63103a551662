use glshell::{
    Config, Selection, Version,
    probe::{self, Probe},
};

#[test]
fn selection_table() {
    let versions = [
        (0, Selection::FallbackText),
        (0x1000, Selection::FallbackText),
        (0x1fff, Selection::FallbackText),
        (0x2000, Selection::GpuSurface),
        (0x2001, Selection::GpuSurface),
        (0x0002_0000, Selection::GpuSurface),
        (0x0003_0002, Selection::GpuSurface),
        (u32::MAX, Selection::GpuSurface),
    ];

    for (raw, expected) in versions {
        let reported = Version::from_raw(raw);
        assert_eq!(
            probe::select(reported, false),
            expected,
            "version {raw:#x} without override",
        );

        assert_eq!(
            probe::select(reported, true),
            Selection::GpuSurface,
            "version {raw:#x} with override",
        );
    }
}

#[test]
fn probe_is_deterministic() {
    let probe = Probe {
        reported: Version::from_raw(0x1000),
        assume_capable: false,
    };

    let first = probe.select();
    for _ in 0..10 {
        assert_eq!(probe.select(), first, "same inputs give the same selection");
    }
}

#[test]
fn config_override() {
    let config = Config::default()
        .with_reported_version(Version::from_raw(0x1000))
        .with_assume_capable(true);

    assert_eq!(
        config.probe().select(),
        Selection::GpuSurface,
        "override selects the surface",
    );
}
