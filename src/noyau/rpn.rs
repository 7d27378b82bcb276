// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> RPN (postfixe)
//
// Règles:
// - Nombre : sortie directe
// - Ident reconnu comme fonction : empilé (la fonction sort après
//   la parenthèse fermante de son argument)
// - Ident inconnu : abandonné en silence (tolérance héritée du
//   tokeniseur ; ne pas s'y fier côté appelant)
// - opérateurs : dépilage tant que précédence(sommet) >= précédence(entrant),
//   ce qui rend TOUS les binaires associatifs à gauche, '^' compris
//   (choix assumé, verrouillé par les tests)

use super::erreur::ErreurNoyau;
use super::jetons::Jeton;

/// Fonctions scientifiques reconnues (toutes unaires).
pub fn est_fonction(nom: &str) -> bool {
    matches!(
        nom,
        "sin" | "cos" | "tan" | "asin" | "acos" | "atan" | "log" | "ln" | "sqrt"
    )
}

/// Symboles opérateurs (binaires infixes + '!' et '%' postfixes).
pub fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^' | '%' | '!')
}

/// Table de précédence statique (plus grand = lie plus fort).
fn precedence(c: char) -> i32 {
    match c {
        '!' => 5,
        '^' => 4,
        '%' => 3,
        '*' | '/' => 2,
        '+' | '-' => 1,
        _ => 0,
    }
}

/// Le sommet de pile bloque-t-il le dépilage ?
/// '(' et les fonctions restent collées : on ne les traverse jamais
/// pour une question de précédence.
fn sommet_bloquant(j: &Jeton) -> bool {
    match j {
        Jeton::Symbole('(') => true,
        Jeton::Ident(nom) => est_fonction(nom),
        _ => false,
    }
}

/// Convertit une suite de jetons infixe en file RPN (ordre FIFO).
///
/// Exemple:
///   jetons: [Ident("sin"), (, 90, )]
///   rpn:    [90, Ident("sin")]
pub fn vers_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurNoyau> {
    let mut sortie: Vec<Jeton> = Vec::new();
    let mut ops: Vec<Jeton> = Vec::new();

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Nombre(_) => sortie.push(jeton),

            Jeton::Ident(nom) => {
                if est_fonction(&nom) {
                    ops.push(Jeton::Ident(nom));
                }
                // identifiant inconnu : ni sortie, ni erreur
            }

            Jeton::Symbole('(') => ops.push(jeton),

            Jeton::Symbole(')') => {
                // dépile jusqu'à '('
                loop {
                    match ops.pop() {
                        Some(Jeton::Symbole('(')) => break,
                        Some(autre) => sortie.push(autre),
                        None => return Err(ErreurNoyau::ParenthesesNonEquilibrees),
                    }
                }

                // fonction au sommet : elle enveloppait ce groupe, on la sort
                if let Some(Jeton::Ident(nom)) = ops.last() {
                    if est_fonction(nom.as_str()) {
                        if let Some(f) = ops.pop() {
                            sortie.push(f);
                        }
                    }
                }
            }

            Jeton::Symbole(op) if est_operateur(op) => {
                while let Some(sommet) = ops.last() {
                    if sommet_bloquant(sommet) {
                        break;
                    }
                    let p_sommet = match sommet {
                        Jeton::Symbole(c) => precedence(*c),
                        _ => 0,
                    };
                    // '>=' : égalité de précédence => le sommet sort d'abord
                    // (associativité gauche pour tous, '^' compris)
                    if p_sommet >= precedence(op) {
                        if let Some(t) = ops.pop() {
                            sortie.push(t);
                        }
                    } else {
                        break;
                    }
                }
                ops.push(Jeton::Symbole(op));
            }

            // le tokeniseur n'émet que les symboles ci-dessus
            Jeton::Symbole(_) => return Err(ErreurNoyau::ExpressionInvalide),
        }
    }

    // vide la pile ops ; un '(' restant = ouverture jamais fermée
    while let Some(op) = ops.pop() {
        if matches!(op, Jeton::Symbole('(')) {
            return Err(ErreurNoyau::ParenthesesNonEquilibrees);
        }
        sortie.push(op);
    }

    Ok(sortie)
}
