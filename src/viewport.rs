//! Output surface handling.
//!
//! Bevy recomputes the camera aspect ratio and the surface size on resize.
//! This plugin leaves the window resolution and scale factor alone and only
//! logs the new size.

use bevy::prelude::*;
use bevy::window::WindowResized;

/// Plugin providing viewport resize handling.
pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, log_resizes);
    }
}

fn log_resizes(mut resized: MessageReader<WindowResized>) {
    if let Some(event) = resized.read().last() {
        info!("Viewport resized to {}x{}", event.width, event.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::window::PrimaryWindow;

    #[test]
    fn test_resize_keeps_window_resolution() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_message::<WindowResized>()
            .add_plugins(ViewportPlugin);

        let mut window = Window::default();
        window.resolution.set_scale_factor(3.0);
        let physical = (
            window.resolution.physical_width(),
            window.resolution.physical_height(),
        );
        let entity = app.world_mut().spawn((window, PrimaryWindow)).id();

        app.world_mut().write_message(WindowResized {
            window: entity,
            width: 640.0,
            height: 480.0,
        });
        for _ in 0..3 {
            app.update();
        }

        // High-density displays keep their native scale and size
        let window = app.world().get::<Window>(entity).unwrap();
        assert_eq!(window.resolution.scale_factor_override(), None);
        assert_eq!(window.resolution.scale_factor(), 3.0);
        assert_eq!(
            (
                window.resolution.physical_width(),
                window.resolution.physical_height()
            ),
            physical
        );
    }
}
