//! Artifacts read from RON data behave like artifacts built in code.

use battle_core::{
    ApplyingMode, Artifact, ArtifactCategory, ArtifactEffect, ArtifactTarget, CombatUnit,
    Creature, CreatureStatistics, DamageRange, FixedDamageCalculator,
};

const DOUBLED_SWORD: &str = r#"(
    name: "Sword of Hellfire",
    rank: Minor,
    placement: RightHand,
    effects: [
        (target: Attack, mode: Add, value: 5.0),
        (target: Attack, mode: Add, value: 5.0),
    ],
)"#;

fn footman() -> Creature {
    let stats =
        CreatureStatistics::new("Footman", 20, 10, 4, DamageRange::new(2, 4).unwrap(), 4).unwrap();
    Creature::builder(stats)
        .calculator(FixedDamageCalculator(3))
        .build()
}

#[test]
fn duplicate_effects_in_data_collapse() {
    let artifact: Artifact = ron::from_str(DOUBLED_SWORD).unwrap();

    assert_eq!(
        artifact.effects(),
        &[ArtifactEffect::new(
            ArtifactTarget::Attack,
            ApplyingMode::Add,
            5.0
        )]
    );
    assert_eq!(artifact.category(), ArtifactCategory::Primary);

    let mut footman = footman();
    footman.apply_artifact(&artifact).unwrap();
    assert_eq!(footman.statistics().attack, 15);
}

#[test]
fn serialized_artifacts_read_back_unchanged() {
    let artifact = Artifact::builder("Ring of Vitality")
        .description("+10% health")
        .price(1500.0)
        .effect(ArtifactEffect::new(
            ArtifactTarget::Health,
            ApplyingMode::Multiply,
            1.1,
        ))
        .effect(ArtifactEffect::new(
            ArtifactTarget::Defence,
            ApplyingMode::Add,
            2.0,
        ))
        .build();

    let text = ron::to_string(&artifact).unwrap();
    let restored: Artifact = ron::from_str(&text).unwrap();

    assert_eq!(restored, artifact);
}
