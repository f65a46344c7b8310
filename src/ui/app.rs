//! Main application for the Gobang GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardOverlay, BoardView};
use super::game_state::{GameMode, GameResult, GameState};
use super::theme::*;
use crate::{AppConfig, Pos, Stone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Start,
    Playing,
}

/// Main Gobang application
pub struct GomokuApp {
    screen: Screen,
    state: GameState,
    board_view: BoardView,
    config: AppConfig,
    show_debug: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let human = if config.human_first {
            Stone::Black
        } else {
            Stone::White
        };
        Self {
            screen: Screen::Start,
            state: GameState::new(GameMode::PvE { human }, config.engine.clone()),
            board_view: BoardView::default(),
            config,
            show_debug: true,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        log::info!("new game: {mode:?}");
        self.state = GameState::new(mode, self.config.engine.clone());
        self.screen = Screen::Playing;
    }

    /// Mode picker shown before the first game
    fn render_start_screen(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.25);
                    ui.label(RichText::new("GOBANG").size(48.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new("five in a row").size(14.0).color(TEXT_MUTED));
                    ui.add_space(32.0);

                    let human = match self.state.mode {
                        GameMode::PvE { human } => human,
                        GameMode::PvP => Stone::Black,
                    };
                    if action_button(ui, &format!("Play vs AI ({})", stone_name(human))) {
                        self.new_game(GameMode::PvE { human });
                    }
                    ui.add_space(8.0);
                    if action_button(ui, &format!("Play vs AI ({})", stone_name(human.opponent()))) {
                        self.new_game(GameMode::PvE { human: human.opponent() });
                    }
                    ui.add_space(8.0);
                    if action_button(ui, "Two players") {
                        self.new_game(GameMode::PvP);
                    }
                    ui.add_space(8.0);
                    if action_button(ui, "Exit") {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs AI, play Black)").clicked() {
                        self.new_game(GameMode::PvE { human: Stone::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs AI, play White)").clicked() {
                        self.new_game(GameMode::PvE { human: Stone::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (two players)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "AI Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => format!("vs AI - You: {}", stone_name(human)),
                        GameMode::PvP => "Two players".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug && matches!(self.state.mode, GameMode::PvE { .. }) {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.result {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, result);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    render_message_card(ui, &msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOBANG").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let size = self.state.board.size();
            ui.label(
                RichText::new(format!("{size}x{size}, five in a row"))
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;
            let accent = match turn {
                Stone::White => WHITE_STONE,
                _ => BLACK_STONE,
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, accent);
                ui.painter()
                    .circle_stroke(rect.center(), 20.0, egui::Stroke::new(1.0, TEXT_MUTED));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(stone_name(turn).to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let (status, color) = if self.state.is_over() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_thinking() {
                        ("AI thinking...", STATUS_BUSY)
                    } else if self.state.is_human_turn() {
                        ("Your turn", STATUS_OK)
                    } else {
                        ("Waiting for AI", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let secs = self
                .state
                .ai_thinking_elapsed()
                .unwrap_or_else(|| self.state.move_timer.elapsed())
                .as_secs_f32();
            let color = if self.state.is_ai_thinking() {
                STATUS_BUSY
            } else {
                TEXT_PRIMARY
            };
            ui.label(RichText::new(format!("{secs:.1}s")).size(24.0).color(color));

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if action_button(ui, "Undo") {
                    self.state.undo();
                }
                ui.add_space(4.0);
                if action_button(ui, "Resign") {
                    if let Err(e) = self.state.resign() {
                        self.state.message = Some(e.to_string());
                    }
                }
                ui.add_space(4.0);
                if action_button(ui, "Restart") {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("No AI move yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(
                RichText::new(format!("Score: {}", result.score))
                    .size(11.0)
                    .strong()
                    .color(STATUS_OK),
            );
            ui.label(
                RichText::new(format!("{} nodes in {}ms", result.nodes, result.time_ms))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!(
                    "Played {}",
                    coordinate(result.best_move, self.state.board.size())
                ))
                .size(12.0)
                .strong()
                .color(WIN_HIGHLIGHT),
            );
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: GameResult) {
        let (headline, detail) = match result {
            GameResult::Win { winner, .. } => {
                (format!("{} WINS", stone_name(winner).to_uppercase()), "five in a row")
            }
            GameResult::Resigned { winner } => {
                (format!("{} WINS", stone_name(winner).to_uppercase()), "by resignation")
            }
            GameResult::Draw => ("DRAW".to_string(), "board is full"),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);
                    if action_button(ui, "New Game") {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let interactive = !self.state.is_over() && self.state.is_human_turn();
            let overlay = BoardOverlay {
                to_move: interactive.then_some(self.state.current_turn),
                last_move: self.state.last_move(),
                winning_line: self.state.winning_line(),
            };

            if let Some(pos) = self.board_view.show(ui, &self.state.board, overlay) {
                if let Err(e) = self.state.try_place_stone(pos) {
                    self.state.message = Some(e.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.screen == Screen::Start {
            self.render_start_screen(ctx);
            return;
        }

        self.handle_input(ctx);
        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && !self.state.is_over() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() || !self.state.is_over() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}

fn stone_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "Black",
        Stone::White => "White",
        Stone::Empty => "-",
    }
}

/// Board coordinate as shown on the grid labels, e.g. `H8`
fn coordinate(pos: Pos, size: usize) -> String {
    let col = (b'A' + pos.col) as char;
    format!("{col}{}", size - usize::from(pos.row))
}

fn action_button(ui: &mut egui::Ui, label: &str) -> bool {
    Frame::new()
        .fill(BUTTON_BG)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(RichText::new(label).size(12.0).color(TEXT_PRIMARY))
                    .sense(egui::Sense::click()),
            )
            .clicked()
        })
        .inner
}

fn render_message_card(ui: &mut egui::Ui, msg: &str) {
    Frame::new()
        .fill(egui::Color32::from_rgb(80, 60, 30))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.label(RichText::new(msg).size(11.0).color(STATUS_ERROR));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_labels() {
        assert_eq!(coordinate(Pos::new(7, 7), 15), "H8");
        assert_eq!(coordinate(Pos::new(0, 0), 15), "A15");
        assert_eq!(coordinate(Pos::new(14, 14), 15), "O1");
    }
}
