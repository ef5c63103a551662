//! Android entry point.
//!
//! Loads `libnative-lib.so` packaged with the APK and hands it the
//! APK asset manager, then runs the surface host on the activity's
//! event loop. The fallback text is shown as a toast.

#![cfg(target_os = "android")]

mod assets;
mod toast;

pub use crate::{assets::ApkAssets, toast::Toast};

use {
    glshell_winit::{glshell, winit},
    winit::platform::android::activity::AndroidApp,
};

#[unsafe(no_mangle)]
fn android_main(app: AndroidApp) {
    use {android_logger::Config, log::LevelFilter};

    android_logger::init_once(
        Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag("glshell"),
    );

    log::info!("start");

    // SAFETY: `libnative-lib.so` is built against the exported C interface
    let collaborator = match unsafe { glshell::native::load_native_collaborator() } {
        Ok(lib) => lib,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };

    let assets = ApkAssets::new(app.asset_manager());
    let toast = Toast::new(app.clone());
    let el = {
        use winit::{event_loop::EventLoop, platform::android::EventLoopBuilderExtAndroid};

        match EventLoop::builder().with_android_app(app).build() {
            Ok(el) => el,
            Err(e) => {
                log::error!("failed to build the event loop: {e}");
                return;
            }
        }
    };

    match glshell_winit::run_on(el, glshell::Config::default(), collaborator, assets, toast) {
        Ok(outcome) => log::info!("finished: {outcome:?}"),
        Err(e) => log::error!("loop error: {e}"),
    }
}
