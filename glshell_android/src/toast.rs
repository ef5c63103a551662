use {
    glshell_winit::{ShowText, winit::platform::android::activity::AndroidApp},
    jni::{
        JNIEnv, JavaVM,
        objects::{JObject, JValue},
    },
};

const LENGTH_LONG: i32 = 1;

/// Shows the fallback text as a system toast over the activity.
pub struct Toast {
    app: AndroidApp,
}

impl Toast {
    pub fn new(app: AndroidApp) -> Self {
        Self { app }
    }

    fn show(&self, text: &str) -> jni::errors::Result<()> {
        // SAFETY: the pointer is the process JavaVM held by the activity
        let vm = unsafe { JavaVM::from_raw(self.app.vm_as_ptr().cast())? };
        let mut env = vm.attach_current_thread()?;

        // SAFETY: the activity outlives `android_main`
        let activity = unsafe { JObject::from_raw(self.app.activity_as_ptr().cast()) };
        let res = make_text(&mut env, &activity, text);
        if env.exception_check()? {
            env.exception_describe()?;
            env.exception_clear()?;
        }

        res
    }
}

impl ShowText for Toast {
    fn show_text(&mut self, text: &str) {
        log::info!("{text}");
        if let Err(e) = self.show(text) {
            log::error!("failed to show the toast: {e}");
        }
    }
}

fn make_text(env: &mut JNIEnv<'_>, activity: &JObject<'_>, text: &str) -> jni::errors::Result<()> {
    // toasts need a looper on the calling thread
    let looper = env
        .call_static_method("android/os/Looper", "myLooper", "()Landroid/os/Looper;", &[])?
        .l()?;

    if looper.is_null() {
        env.call_static_method("android/os/Looper", "prepare", "()V", &[])?;
    }

    let text = env.new_string(text)?;
    let toast = env
        .call_static_method(
            "android/widget/Toast",
            "makeText",
            "(Landroid/content/Context;Ljava/lang/CharSequence;I)Landroid/widget/Toast;",
            &[
                JValue::Object(activity),
                JValue::Object(&text),
                JValue::Int(LENGTH_LONG),
            ],
        )?
        .l()?;

    env.call_method(&toast, "show", "()V", &[])?;
    Ok(())
}
