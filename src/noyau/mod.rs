//! Noyau de calcul (f64, sans état entre appels)
//!
//! Organisation interne :
//! - canon.rs   : réécriture de surface (×, ÷, π, inv(…)
//! - jetons.rs  : tokenisation
//! - rpn.rs     : shunting-yard (infixe -> postfixe)
//! - eval.rs    : évaluation postfixe + pipeline complet
//! - format.rs  : affichage (quasi-entiers, 8 décimales rognées)
//! - erreur.rs  : taxonomie interne, rabattue sur "Error" en sortie

pub mod canon;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::evaluer_expression;
