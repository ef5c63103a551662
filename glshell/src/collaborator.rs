use crate::assets::AssetSource;

/// The calls the shell forwards to the rendering and game logic.
///
/// Every call is fire-and-forget: the shell neither inspects results
/// nor recovers from faults raised inside an implementation.
pub trait Collaborator {
    /// Runs once before any surface event.
    fn on_initial_setup(&mut self, assets: &dyn AssetSource);

    fn on_surface_created(&mut self);

    /// The surface got new pixel dimensions.
    fn on_surface_changed(&mut self, width: i32, height: i32);

    fn on_draw_frame(&mut self);

    /// The text shown when no GPU surface is available.
    fn query_display_string(&mut self) -> String;
}

impl<C> Collaborator for &mut C
where
    C: Collaborator + ?Sized,
{
    fn on_initial_setup(&mut self, assets: &dyn AssetSource) {
        (**self).on_initial_setup(assets);
    }

    fn on_surface_created(&mut self) {
        (**self).on_surface_created();
    }

    fn on_surface_changed(&mut self, width: i32, height: i32) {
        (**self).on_surface_changed(width, height);
    }

    fn on_draw_frame(&mut self) {
        (**self).on_draw_frame();
    }

    fn query_display_string(&mut self) -> String {
        (**self).query_display_string()
    }
}

impl<C> Collaborator for Box<C>
where
    C: Collaborator + ?Sized,
{
    fn on_initial_setup(&mut self, assets: &dyn AssetSource) {
        (**self).on_initial_setup(assets);
    }

    fn on_surface_created(&mut self) {
        (**self).on_surface_created();
    }

    fn on_surface_changed(&mut self, width: i32, height: i32) {
        (**self).on_surface_changed(width, height);
    }

    fn on_draw_frame(&mut self) {
        (**self).on_draw_frame();
    }

    fn query_display_string(&mut self) -> String {
        (**self).query_display_string()
    }
}
