// src/noyau/jetons.rs

/// Jeton lexical produit par `tokeniser`, consommé tel quel par rpn.rs.
#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    /// Nom alphabétique (fonction scientifique… ou pas : c'est rpn.rs qui tranche).
    Ident(String),
    /// Un caractère de l'ensemble `^ * / + - ( ) ! %`.
    Symbole(char),
}

/// Symboles opérateurs/ponctuation reconnus par le tokeniseur.
fn est_symbole(c: char) -> bool {
    matches!(c, '^' | '*' | '/' | '+' | '-' | '(' | ')' | '!' | '%')
}

/// Découpe une chaîne canonique en jetons.
///
/// Alternance par priorité, à chaque position :
/// 1. littéral numérique : chiffres optionnels, point décimal optionnel,
///    au moins un chiffre derrière (sémantique `\d*\.?\d+` : "5." donne
///    le nombre 5 puis le point est ignoré ; ".5" donne 0.5)
/// 2. suite de lettres ASCII (nom de fonction/identifiant)
/// 3. un symbole de l'ensemble ci-dessus
///
/// Tout caractère qui ne colle à aucun motif (espace, glyphe inconnu)
/// est ignoré en silence : pas de jeton, pas d'erreur à ce stade.
pub fn tokeniser(texte: &str) -> Vec<Jeton> {
    let chars: Vec<char> = texte.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Littéral numérique : commence par un chiffre, ou par '.' suivi d'un chiffre.
        let debut_nombre = c.is_ascii_digit()
            || (c == '.' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit());
        if debut_nombre {
            let debut = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            // Partie fractionnaire seulement si le point est suivi d'un chiffre,
            // sinon "5." se lit comme le nombre 5.
            if i < chars.len()
                && chars[i] == '.'
                && i + 1 < chars.len()
                && chars[i + 1].is_ascii_digit()
            {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let texte_nombre: String = chars[debut..i].iter().collect();
            // Le motif garantit un flottant valide.
            if let Ok(v) = texte_nombre.parse::<f64>() {
                out.push(Jeton::Nombre(v));
            }
            continue;
        }

        // Suite de lettres ASCII.
        if c.is_ascii_alphabetic() {
            let debut = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            out.push(Jeton::Ident(chars[debut..i].iter().collect()));
            continue;
        }

        if est_symbole(c) {
            out.push(Jeton::Symbole(c));
            i += 1;
            continue;
        }

        // Caractère hors motifs : ignoré en silence.
        i += 1;
    }

    out
}

/// Format utilitaire (tests) : liste de jetons en texte.
#[cfg(test)]
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::new();
    for j in jetons {
        let s = match j {
            Jeton::Nombre(v) => format!("{v}"),
            Jeton::Ident(nom) => nom.clone(),
            Jeton::Symbole(c) => c.to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
