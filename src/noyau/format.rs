// src/noyau/format.rs
//
// Dernier étage du pipeline : f64 -> chaîne d'affichage.
// C'est ici (et seulement ici) que NaN/±∞ deviennent "Error" :
// l'évaluateur laisse volontairement passer les fautes de domaine
// flottant (1/0, sqrt(-1), log(0), …).

/// Seuil sous lequel la partie fractionnaire est considérée nulle.
const SEUIL_ENTIER: f64 = 1e-10;

/// Formate un résultat numérique pour l'affichage.
///
/// - NaN / ±∞              => "Error"
/// - quasi-entier          => troncature entière, sans point
/// - sinon                 => 8 décimales, zéros de fin puis point
///                            de fin retirés ("2.50000000" -> "2.5")
pub fn format_resultat(valeur: f64) -> String {
    if valeur.is_nan() || valeur.is_infinite() {
        return "Error".to_string();
    }

    if (valeur % 1.0).abs() < SEUIL_ENTIER {
        // troncature façon toLong : sature aux bornes i64 pour les
        // très grands finis, comme l'écran d'origine
        return format!("{}", valeur.trunc() as i64);
    }

    let fixe = format!("{valeur:.8}");
    fixe.trim_end_matches('0').trim_end_matches('.').to_string()
}
