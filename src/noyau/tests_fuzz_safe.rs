//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le point d'entrée sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : jamais de panique ; la sortie est soit "Error",
//!   soit un décimal fini re-parsable (le contrat ne laisse rien
//!   d'autre sortir)

use std::time::{Duration, Instant};

use super::eval::evaluer_expression;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(8) {
        0 => "0".to_string(),
        1 => "1".to_string(),
        2 => "2".to_string(),
        3 => "3".to_string(),
        4 => "7".to_string(),
        5 => "12".to_string(),
        6 => "2.5".to_string(),
        _ => "π".to_string(),
    }
}

/// Expressions bien formées (parenthèses équilibrées par construction),
/// glyphes clavier compris (×, ÷, π).
fn gen_expr(rng: &mut Rng, profondeur: usize) -> String {
    if profondeur == 0 {
        return gen_atome(rng);
    }

    match rng.pick(12) {
        0 => gen_atome(rng),
        1 => format!(
            "({}+{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        2 => format!(
            "({}-{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        3 => format!(
            "({}×{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        4 => format!(
            "({}÷{})",
            gen_expr(rng, profondeur - 1),
            gen_expr(rng, profondeur - 1)
        ),
        5 => format!("({}^{})", gen_atome(rng), gen_atome(rng)),
        6 => format!("sin({})", gen_expr(rng, profondeur - 1)),
        7 => format!("cos({})", gen_expr(rng, profondeur - 1)),
        8 => format!("sqrt({})", gen_expr(rng, profondeur - 1)),
        9 => format!("log({})", gen_expr(rng, profondeur - 1)),
        10 => format!("({})%", gen_expr(rng, profondeur - 1)),
        _ => {
            // factorielle sur petit entier seulement (sinon quasi toujours Error)
            if rng.coin() {
                format!("{}!", rng.pick(6))
            } else {
                format!("ln({})", gen_expr(rng, profondeur - 1))
            }
        }
    }
}

/// La sortie respecte-t-elle le contrat d'affichage ?
fn sortie_conforme(s: &str) -> bool {
    if s == "Error" {
        return true;
    }
    match s.parse::<f64>() {
        Ok(v) => v.is_finite(),
        Err(_) => false,
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_sortie_toujours_conforme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let sortie = evaluer_expression(&expr, rng.coin());

        assert!(
            sortie_conforme(&sortie),
            "sortie hors contrat: expr={expr:?} sortie={sortie:?}"
        );

        if sortie == "Error" {
            vus_err += 1;
        } else {
            vus_ok += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(vus_ok > 50, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes expressions => mêmes sorties.
    let mut rng_a = Rng::new(0xBADC0DE_u64);
    let mut rng_b = Rng::new(0xBADC0DE_u64);

    for _ in 0..150 {
        budget(t0, max);

        let ea = gen_expr(&mut rng_a, 4);
        let eb = gen_expr(&mut rng_b, 4);
        assert_eq!(ea, eb);

        assert_eq!(
            evaluer_expression(&ea, false),
            evaluer_expression(&eb, false)
        );
        assert_eq!(evaluer_expression(&ea, true), evaluer_expression(&eb, true));
    }
}

#[test]
fn fuzz_safe_chainage_resultats() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        let sortie = evaluer_expression(&expr, false);

        // Un résultat fini non négatif réinjecté doit se réévaluer en
        // lui-même. (Négatif exclu : pas de moins unaire au tokenage,
        // "-5" seul n'est pas une expression valide.)
        if sortie != "Error" && !sortie.starts_with('-') {
            assert_eq!(
                evaluer_expression(&sortie, false),
                sortie,
                "chaînage non idempotent pour expr={expr:?}"
            );
        }
    }
}

#[test]
fn fuzz_safe_desequilibre_force() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xD15EA5E_u64);

    // Une fermante de trop casse toujours la conversion.
    for _ in 0..100 {
        budget(t0, max);

        let expr = format!("{})", gen_expr(&mut rng, 3));
        assert_eq!(evaluer_expression(&expr, false), "Error");
    }
}
