// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier physique : saisie libre dans le champ, Enter évalue
// - Tactile : gros boutons, focus redonné après clic (focus_expression)
// - Deux claviers : base (4 colonnes) et scientifique (5 colonnes),
//   disposition reprise de l'écran d'origine
//
// Les boutons insèrent les glyphes que le noyau canonicalise lui-même
// (×, ÷, π, "inv(", "sin(", …) : la vue ne réécrit rien.

use eframe::egui;

use super::etat::AppCalc;

/* ------------------------ Palette (écran d'origine) ------------------------ */

const COULEUR_CHIFFRE: egui::Color32 = egui::Color32::from_rgb(0x33, 0x33, 0x33);
const COULEUR_OPERATEUR: egui::Color32 = egui::Color32::from_rgb(0xFE, 0x9F, 0x0A);
const COULEUR_CONTROLE: egui::Color32 = egui::Color32::from_rgb(0xA5, 0xA5, 0xA5);
const COULEUR_SCI: egui::Color32 = egui::Color32::from_rgb(0x50, 0x50, 0x50);

const TAILLE_BOUTON: [f32; 2] = [64.0, 44.0];

#[derive(Clone, Copy, Debug)]
enum Touche {
    Inserer(&'static str),
    EffacerTout,
    EffacerDernier,
    Calculer,
    BasculerMode,
    BasculerClavier,
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_affichage(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if self.scientifique {
                    self.ui_clavier_scientifique(ui);
                } else {
                    self.ui_clavier_base(ui);
                }
            });
    }

    /* ------------------------ Zone d'affichage ------------------------ */

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        // Champ éditable : permet aussi la saisie clavier physique.
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.expression)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2+3×4, sin(90), 5!, inv(sin(1)")
                .id_source("expression_edit")
                .font(egui::TextStyle::Heading),
        );

        // Si on a cliqué un bouton, on redonne le focus au champ.
        if self.focus_expression {
            resp.request_focus();
            self.focus_expression = false;
        }

        // Enter évalue (seulement si le champ est focus, pour éviter
        // les déclenchements globaux).
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.calculer();
            self.focus_expression = true;
        }

        // Résultat : gros, aligné à droite, "0" si rien encore.
        let texte = if self.resultat.is_empty() {
            "0"
        } else {
            self.resultat.as_str()
        };
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(texte).size(40.0).strong());
            ui.label(
                egui::RichText::new(if self.mode_radians { "rad" } else { "deg" })
                    .size(14.0)
                    .weak(),
            );
        });
    }

    /* ------------------------ Claviers ------------------------ */

    fn ui_clavier_base(&mut self, ui: &mut egui::Ui) {
        use Touche::*;

        egui::Grid::new("clavier_base")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "AC", COULEUR_CONTROLE, EffacerTout);
                self.bouton(ui, "%", COULEUR_CONTROLE, Inserer("%"));
                self.bouton(ui, "DEL", COULEUR_CONTROLE, EffacerDernier);
                self.bouton(ui, "÷", COULEUR_OPERATEUR, Inserer("÷"));
                ui.end_row();

                self.bouton(ui, "7", COULEUR_CHIFFRE, Inserer("7"));
                self.bouton(ui, "8", COULEUR_CHIFFRE, Inserer("8"));
                self.bouton(ui, "9", COULEUR_CHIFFRE, Inserer("9"));
                self.bouton(ui, "×", COULEUR_OPERATEUR, Inserer("×"));
                ui.end_row();

                self.bouton(ui, "4", COULEUR_CHIFFRE, Inserer("4"));
                self.bouton(ui, "5", COULEUR_CHIFFRE, Inserer("5"));
                self.bouton(ui, "6", COULEUR_CHIFFRE, Inserer("6"));
                self.bouton(ui, "-", COULEUR_OPERATEUR, Inserer("-"));
                ui.end_row();

                self.bouton(ui, "1", COULEUR_CHIFFRE, Inserer("1"));
                self.bouton(ui, "2", COULEUR_CHIFFRE, Inserer("2"));
                self.bouton(ui, "3", COULEUR_CHIFFRE, Inserer("3"));
                self.bouton(ui, "+", COULEUR_OPERATEUR, Inserer("+"));
                ui.end_row();

                self.bouton(ui, "SC", COULEUR_CONTROLE, BasculerClavier);
                self.bouton(ui, "0", COULEUR_CHIFFRE, Inserer("0"));
                self.bouton(ui, ".", COULEUR_CHIFFRE, Inserer("."));
                self.bouton(ui, "=", COULEUR_OPERATEUR, Calculer);
                ui.end_row();
            });
    }

    fn ui_clavier_scientifique(&mut self, ui: &mut egui::Ui) {
        use Touche::*;

        // Le bouton de mode affiche la cible de la bascule.
        let label_mode = if self.mode_radians { "deg" } else { "rad" };
        let couleur_mode = if self.mode_radians {
            COULEUR_OPERATEUR
        } else {
            COULEUR_SCI
        };

        egui::Grid::new("clavier_scientifique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "sin", COULEUR_SCI, Inserer("sin("));
                self.bouton(ui, "cos", COULEUR_SCI, Inserer("cos("));
                self.bouton(ui, "tan", COULEUR_SCI, Inserer("tan("));
                self.bouton(ui, label_mode, couleur_mode, BasculerMode);
                self.bouton(ui, "inv", COULEUR_SCI, Inserer("inv("));
                ui.end_row();

                self.bouton(ui, "log", COULEUR_SCI, Inserer("log("));
                self.bouton(ui, "ln", COULEUR_SCI, Inserer("ln("));
                self.bouton(ui, "(", COULEUR_SCI, Inserer("("));
                self.bouton(ui, ")", COULEUR_SCI, Inserer(")"));
                self.bouton(ui, "!", COULEUR_SCI, Inserer("!"));
                ui.end_row();

                self.bouton(ui, "π", COULEUR_SCI, Inserer("π"));
                self.bouton(ui, "AC", COULEUR_CONTROLE, EffacerTout);
                self.bouton(ui, "%", COULEUR_CONTROLE, Inserer("%"));
                self.bouton(ui, "DEL", COULEUR_CONTROLE, EffacerDernier);
                self.bouton(ui, "÷", COULEUR_OPERATEUR, Inserer("÷"));
                ui.end_row();

                self.bouton(ui, "^", COULEUR_SCI, Inserer("^"));
                self.bouton(ui, "7", COULEUR_CHIFFRE, Inserer("7"));
                self.bouton(ui, "8", COULEUR_CHIFFRE, Inserer("8"));
                self.bouton(ui, "9", COULEUR_CHIFFRE, Inserer("9"));
                self.bouton(ui, "×", COULEUR_OPERATEUR, Inserer("×"));
                ui.end_row();

                self.bouton(ui, "√", COULEUR_SCI, Inserer("sqrt("));
                self.bouton(ui, "4", COULEUR_CHIFFRE, Inserer("4"));
                self.bouton(ui, "5", COULEUR_CHIFFRE, Inserer("5"));
                self.bouton(ui, "6", COULEUR_CHIFFRE, Inserer("6"));
                self.bouton(ui, "-", COULEUR_OPERATEUR, Inserer("-"));
                ui.end_row();

                self.bouton(ui, "1/x", COULEUR_SCI, Inserer("1/("));
                self.bouton(ui, "1", COULEUR_CHIFFRE, Inserer("1"));
                self.bouton(ui, "2", COULEUR_CHIFFRE, Inserer("2"));
                self.bouton(ui, "3", COULEUR_CHIFFRE, Inserer("3"));
                self.bouton(ui, "+", COULEUR_OPERATEUR, Inserer("+"));
                ui.end_row();

                self.bouton(ui, "B", COULEUR_OPERATEUR, BasculerClavier);
                self.bouton(ui, "0", COULEUR_CHIFFRE, Inserer("0"));
                self.bouton(ui, ".", COULEUR_CHIFFRE, Inserer("."));
                self.bouton(ui, "=", COULEUR_OPERATEUR, Calculer);
                ui.end_row();
            });
    }

    /* ------------------------ Bouton générique ------------------------ */

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, couleur: egui::Color32, touche: Touche) {
        let texte = egui::RichText::new(label)
            .size(18.0)
            .color(egui::Color32::WHITE);
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(texte).fill(couleur));

        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Inserer(fragment) => self.inserer(fragment),
            Touche::EffacerTout => self.effacer_tout(),
            Touche::EffacerDernier => self.effacer_dernier(),
            Touche::Calculer => self.calculer(),
            Touche::BasculerMode => self.basculer_mode(),
            Touche::BasculerClavier => self.basculer_clavier(),
        }
    }
}
