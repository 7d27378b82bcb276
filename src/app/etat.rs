//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau... sauf `calculer`).
//!
//! Rôle : contenir l'état de la calculatrice (expression en cours,
//! dernier résultat, mode d'angle, clavier affiché) et offrir les
//! actions boutons (AC / DEL / = / bascules).
//!
//! Contrats :
//! - Le mode d'angle vit ICI et est passé au noyau à chaque appel :
//!   le noyau reste sans état.
//! - '=' réinjecte le résultat comme nouvelle expression (chaînage).

use crate::noyau::evaluer_expression;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub expression: String,

    // --- sortie ---
    pub resultat: String,

    // --- paramètres ---
    pub mode_radians: bool, // degrés par défaut
    pub scientifique: bool, // clavier scientifique affiché ?

    // --- UX ---
    // Permet à vue.rs de redonner le focus au champ après un clic bouton.
    pub focus_expression: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            expression: String::new(),
            resultat: String::new(),
            mode_radians: false,
            scientifique: false,
            focus_expression: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Insère un fragment tel quel (chiffre, glyphe ×/÷/π, "sin(", …).
    pub fn inserer(&mut self, fragment: &str) {
        self.expression.push_str(fragment);
        self.focus_expression = true;
    }

    /// AC : efface expression + résultat.
    pub fn effacer_tout(&mut self) {
        self.expression.clear();
        self.resultat.clear();
        self.focus_expression = true;
    }

    /// DEL : retire le dernier caractère de l'expression.
    pub fn effacer_dernier(&mut self) {
        self.expression.pop();
        self.focus_expression = true;
    }

    /// rad/deg : bascule le mode d'angle (transmis au noyau au prochain '=').
    pub fn basculer_mode(&mut self) {
        self.mode_radians = !self.mode_radians;
        self.focus_expression = true;
    }

    /// SC/B : bascule clavier de base <-> clavier scientifique.
    pub fn basculer_clavier(&mut self) {
        self.scientifique = !self.scientifique;
        self.focus_expression = true;
    }

    /// '=' : évalue via le noyau, puis réinjecte le résultat comme
    /// nouvelle expression (enchaînement des '=' successifs).
    pub fn calculer(&mut self) {
        self.resultat = evaluer_expression(&self.expression, self.mode_radians);
        self.expression = self.resultat.clone();
        self.focus_expression = true;
    }
}
