//! Noyau — évaluation (pipeline complet)
//!
//! canonicaliser -> tokeniser -> RPN -> évaluation postfixe -> format
//!
//! Tout est local à l'appel : pas d'état partagé entre deux évaluations,
//! le mode d'angle arrive en paramètre et repart avec la pile.

use super::canon::canonicaliser;
use super::erreur::ErreurNoyau;
use super::format::format_resultat;
use super::jetons::{tokeniser, Jeton};
use super::rpn::{est_fonction, est_operateur, vers_rpn};

/// API publique : évalue une expression "calculatrice" et retourne la
/// chaîne d'affichage.
///
/// Contrat d'erreur : entrée vide => chaîne vide ; toute défaillance
/// interne (parenthèses, RPN malformée, factorielle hors domaine…)
/// => la chaîne "Error", sans détail. Les fautes de domaine flottant
/// (1/0, sqrt(-1), log(0)) traversent en NaN/∞ et sont rattrapées par
/// le formateur, avec le même affichage.
pub fn evaluer_expression(expression: &str, mode_radians: bool) -> String {
    if expression.is_empty() {
        return String::new();
    }

    match pipeline(expression, mode_radians) {
        Ok(affichage) => affichage,
        Err(_) => "Error".to_string(),
    }
}

fn pipeline(expression: &str, mode_radians: bool) -> Result<String, ErreurNoyau> {
    let canonique = canonicaliser(expression);
    let jetons = tokeniser(&canonique);
    let rpn = vers_rpn(&jetons)?;
    let valeur = evaluer_rpn(&rpn, mode_radians)?;
    Ok(format_resultat(valeur))
}

/// Évalue une file RPN contre une pile de valeurs f64.
///
/// Ordre des opérandes binaires : premier pop = opérande DROIT.
pub fn evaluer_rpn(rpn: &[Jeton], mode_radians: bool) -> Result<f64, ErreurNoyau> {
    let mut pile: Vec<f64> = Vec::new();

    for jeton in rpn {
        match jeton {
            Jeton::Nombre(v) => pile.push(*v),

            // '!' : postfixe unaire, domaine = entiers >= 0 (0! = 1)
            Jeton::Symbole('!') => {
                let v = pile.pop().ok_or(ErreurNoyau::ExpressionInvalide)?;
                pile.push(factorielle(v)?);
            }

            // '%' : postfixe unaire, v -> v/100
            Jeton::Symbole('%') => {
                let v = pile.pop().ok_or(ErreurNoyau::ExpressionInvalide)?;
                pile.push(v / 100.0);
            }

            Jeton::Symbole(op) if est_operateur(*op) => {
                if pile.len() < 2 {
                    return Err(ErreurNoyau::ExpressionInvalide);
                }
                let droite = pile.pop().ok_or(ErreurNoyau::ExpressionInvalide)?;
                let gauche = pile.pop().ok_or(ErreurNoyau::ExpressionInvalide)?;

                let resultat = match op {
                    '+' => gauche + droite,
                    '-' => gauche - droite,
                    // pas de garde division par zéro : ±∞ traverse,
                    // le formateur s'en charge
                    '*' => gauche * droite,
                    '/' => gauche / droite,
                    '^' => gauche.powf(droite),
                    _ => return Err(ErreurNoyau::ExpressionInvalide),
                };
                pile.push(resultat);
            }

            Jeton::Ident(nom) if est_fonction(nom.as_str()) => {
                let v = pile.pop().ok_or(ErreurNoyau::ExpressionInvalide)?;
                pile.push(appliquer_fonction(nom.as_str(), v, mode_radians)?);
            }

            // symbole/identifiant inconnu arrivé jusqu'ici : RPN corrompue
            _ => return Err(ErreurNoyau::ExpressionInvalide),
        }
    }

    // exactement une valeur doit rester (expression vide comprise)
    if pile.len() != 1 {
        return Err(ErreurNoyau::ExpressionInvalide);
    }
    pile.pop().ok_or(ErreurNoyau::ExpressionInvalide)
}

/// v! pour v entier >= 0, sinon erreur (égalité stricte avec floor,
/// aucune tolérance).
fn factorielle(v: f64) -> Result<f64, ErreurNoyau> {
    if v < 0.0 || v != v.floor() {
        return Err(ErreurNoyau::FactorielleInvalide);
    }

    let mut resultat = 1.0_f64;
    for i in 2..=(v as u64) {
        resultat *= i as f64;
        // au-delà de 170! le f64 a déjà débordé, inutile de continuer
        if !resultat.is_finite() {
            break;
        }
    }
    Ok(resultat)
}

/// Applique une fonction scientifique en respectant le mode d'angle :
/// - trig directe : l'argument est un angle (converti si mode degrés)
/// - trig inverse : l'argument est un rapport, c'est le RÉSULTAT qui
///   est converti en degrés le cas échéant
/// - log/ln/sqrt : hors domaine => NaN, rattrapé au formatage
fn appliquer_fonction(nom: &str, v: f64, mode_radians: bool) -> Result<f64, ErreurNoyau> {
    let resultat = match nom {
        "sin" => {
            if mode_radians {
                v.sin()
            } else {
                v.to_radians().sin()
            }
        }
        "cos" => {
            if mode_radians {
                v.cos()
            } else {
                v.to_radians().cos()
            }
        }
        "tan" => {
            if mode_radians {
                v.tan()
            } else {
                v.to_radians().tan()
            }
        }
        "asin" => {
            if mode_radians {
                v.asin()
            } else {
                v.asin().to_degrees()
            }
        }
        "acos" => {
            if mode_radians {
                v.acos()
            } else {
                v.acos().to_degrees()
            }
        }
        "atan" => {
            if mode_radians {
                v.atan()
            } else {
                v.atan().to_degrees()
            }
        }
        "log" => v.log10(),
        "ln" => v.ln(),
        "sqrt" => v.sqrt(),
        _ => return Err(ErreurNoyau::ExpressionInvalide),
    };
    Ok(resultat)
}
