// src/noyau/erreur.rs
//
// Taxonomie interne des erreurs du pipeline.
// Aucune de ces variantes n'atteint l'appelant telle quelle :
// eval_expression les rabat toutes sur la chaîne "Error".

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    /// '(' / ')' dépareillées détectées pendant la conversion RPN.
    #[error("parenthèses non équilibrées")]
    ParenthesesNonEquilibrees,

    /// RPN malformée : pile vide au pop, cardinalité finale ≠ 1,
    /// opérateur ou fonction inconnu arrivé jusqu'à l'évaluateur.
    #[error("expression invalide")]
    ExpressionInvalide,

    /// Factorielle d'un opérande négatif ou non entier.
    #[error("factorielle d'un opérande négatif ou non entier")]
    FactorielleInvalide,
}
