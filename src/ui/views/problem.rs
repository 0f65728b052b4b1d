use crate::app::{KodeSiapApp, RunStatus};
use crate::model::Problem;
use crate::ui::helpers::{difficulty_chip, labeled_mono};
use crate::ui::layout::{code_block, code_editor_input, two_button_row};
use egui::{Button, Color32, RichText, Ui};

/// Panel de un problema: enunciado, editor, consola y solución
pub fn ui_problem(app: &mut KodeSiapApp, ui: &mut Ui, problem: &Problem, width: f32) {
    let solved = app.session.progress().is_solved(&problem.id);
    let now = ui.input(|i| i.time);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(width);

        ui.horizontal(|ui| {
            ui.label(RichText::new(&problem.title).heading().strong());
            difficulty_chip(ui, problem.difficulty);
            if solved {
                ui.label(RichText::new("✔ Solved").small().color(Color32::from_rgb(22, 163, 74)));
            }
        });
        ui.label(&problem.description);
        ui.add_space(8.0);

        ui.columns(2, |cols| {
            labeled_mono(&mut cols[0], "Input Format", &problem.input_format);
            labeled_mono(&mut cols[1], "Output Format", &problem.output_format);
        });
        ui.add_space(6.0);
        ui.label(RichText::new("EXAMPLE").small().strong());
        ui.columns(2, |cols| {
            labeled_mono(&mut cols[0], "Input", &problem.sample_input);
            labeled_mono(&mut cols[1], "Output", &problem.sample_output);
        });
        if let Some(explanation) = &problem.explanation {
            ui.small(format!("💡 {explanation}"));
        }
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.small("solution.py");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small("Python 3");
            });
        });
        code_editor_input(
            ui,
            &format!("editor_{}", problem.id),
            width,
            12,
            &mut app.solver_mut(&problem.id).code,
        );

        let running = app.runs.is_running(&problem.id);
        let show_solution = app.solver(&problem.id).map(|s| s.show_solution).unwrap_or(false);

        ui.horizontal(|ui| {
            let toggle_label = if show_solution {
                "🙈 Hide Solution"
            } else {
                "👁 Show Solution"
            };
            if ui.button(toggle_label).clicked() {
                app.toggle_solution(&problem.id);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let run_label = if running { "Running..." } else { "▶ Run Code" };
                let (run, reset) = two_button_row(
                    ui,
                    260.0,
                    Button::new(run_label).fill(Color32::from_rgb(22, 163, 74)),
                    Button::new("⟲ Reset"),
                    !running,
                );
                // right_to_left: el primero queda a la derecha
                if run {
                    app.start_run(&problem.id, now);
                }
                if reset {
                    app.reset_code(&problem.id);
                }
            });
        });

        // Consola
        if let Some(solver) = app.solver(&problem.id) {
            if solver.status != RunStatus::Idle || !solver.output.is_empty() {
                ui.separator();
                let (title, color) = match solver.status {
                    RunStatus::Success => ("✔ CONSOLE OUTPUT", Color32::from_rgb(22, 163, 74)),
                    RunStatus::Error => ("⚠ CONSOLE OUTPUT", Color32::from_rgb(220, 38, 38)),
                    _ => ("CONSOLE OUTPUT", ui.visuals().text_color()),
                };
                ui.label(RichText::new(title).small().strong().color(color));
                ui.label(RichText::new(&solver.output).monospace().color(color));
            }
        }

        // Solución de referencia
        if show_solution {
            ui.separator();
            ui.label(RichText::new("Solution Reference").strong());
            code_block(ui, &format!("solution_{}", problem.id), width, &problem.solution_code);
            ui.columns(2, |cols| {
                labeled_mono(&mut cols[0], "Time Complexity", &problem.time_complexity);
                labeled_mono(&mut cols[1], "Space Complexity", &problem.space_complexity);
            });
        }
    });
}
