// src/noyau/canon.rs
//
// Canonicalisation de surface (avant tokenisation) :
// - glyphes clavier  : × -> *, ÷ -> /
// - constante        : π -> son développement décimal f64 complet
// - fonctions inverses : inv(sin( -> asin(, idem cos/tan
//   (remplacement textuel pur : "inv(" composé avec autre chose
//   traverse tel quel et échouera plus loin)
// - jetons d'entretien DEL / AC : supprimés s'ils se retrouvent
//   incrustés dans la chaîne
//
// Jamais d'erreur ici : chaîne en entrée, chaîne en sortie.

/// π en décimal, précision f64 complète (même texte que `f64::consts::PI`).
const PI_DECIMAL: &str = "3.141592653589793";

/// Réécrit la syntaxe de surface en forme canonique tokenisable.
pub fn canonicaliser(brut: &str) -> String {
    brut.replace('×', "*")
        .replace('÷', "/")
        .replace('π', PI_DECIMAL)
        .replace("inv(sin(", "asin(")
        .replace("inv(cos(", "acos(")
        .replace("inv(tan(", "atan(")
        .replace("DEL", "")
        .replace("AC", "")
}
