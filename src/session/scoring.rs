#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EncouragementTier {
    Perfect,
    Great,
    Good,
    KeepPracticing,
}

impl EncouragementTier {
    pub fn message(&self) -> &'static str {
        match self {
            EncouragementTier::Perfect => "¡Perfecto! Eres un genio de la gramática 🌟",
            EncouragementTier::Great => "¡Muy bien hecho! Sigue así 🚀",
            EncouragementTier::Good => "¡No está mal! Un empujón más 💪",
            EncouragementTier::KeepPracticing => "No te desanimes, practicando mejorarás 📚",
        }
    }
}

/// Nivel de ánimo según aciertos/total. Los límites 0.8 y 0.6 son inclusivos y
/// se comparan en enteros (5·score frente a 4·total y 3·total), ensanchados a u128.
pub fn encouragement_tier(score: usize, total: usize) -> EncouragementTier {
    if total == 0 {
        return EncouragementTier::KeepPracticing;
    }
    let (score5, total) = (5 * score as u128, total as u128);
    if score5 >= 5 * total {
        EncouragementTier::Perfect
    } else if score5 >= 4 * total {
        EncouragementTier::Great
    } else if score5 >= 3 * total {
        EncouragementTier::Good
    } else {
        EncouragementTier::KeepPracticing
    }
}
