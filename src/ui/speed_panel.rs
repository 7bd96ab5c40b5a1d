//! Floating "System Speed" panel with the speed multiplier slider.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::icons;
use crate::types::SimulationSpeed;

/// System that renders the speed panel.
pub fn speed_panel(mut contexts: EguiContexts, mut speed: ResMut<SimulationSpeed>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("System Speed")
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .resizable(false)
        .collapsible(true)
        .frame(
            egui::Frame::NONE
                .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 220))
                .inner_margin(egui::Margin::symmetric(12, 8))
                .corner_radius(6.0),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let state = if speed.is_frozen() {
                    icons::FROZEN
                } else {
                    icons::RUNNING
                };
                ui.label(format!("{} {}", icons::SPEED, state));

                // Edit a copy so every write goes through the clamp
                let mut value = speed.multiplier();
                let slider = egui::Slider::new(&mut value, speed.min..=speed.max)
                    .step_by(speed.step)
                    .fixed_decimals(1)
                    .suffix("x");
                if ui.add(slider).changed() {
                    speed.set(value);
                }
            });
        });
}
