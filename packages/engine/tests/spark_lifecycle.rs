use lifeglow_engine::{BackgroundCore, DrawList, EffectSettings};

fn spark_alphas(surface: &DrawList) -> Vec<f32> {
    surface
        .fills()
        .filter(|(_, _, _, _, color)| color.h == 320.0)
        .map(|(_, _, _, _, color)| color.a)
        .collect()
}

#[test]
fn spark_fades_for_49_ticks_and_is_gone_on_the_50th() {
    let mut core = BackgroundCore::with_seed(EffectSettings::DEFAULT, 11);
    core.on_resize(0.0, 0.0);
    let mut surface = DrawList::new(0, 0);

    assert_eq!(core.on_click(60.0, 35.0, 0.0, 0.0), (2, 1));

    let mut last = f32::INFINITY;
    for tick in 1..=49u32 {
        surface.take();
        core.paint(&mut surface);
        let alphas = spark_alphas(&surface);
        assert_eq!(alphas.len(), 1, "tick {tick}");
        let alpha = alphas[0];
        assert!(alpha > 0.0 && alpha < last, "tick {tick}: {alpha} vs {last}");
        assert!((alpha - (50 - tick) as f32 / 50.0).abs() < 1e-6);
        last = alpha;
    }

    surface.take();
    let counts = core.paint(&mut surface);
    assert_eq!(counts.expired, 1);
    assert!(spark_alphas(&surface).is_empty());
    assert!(core.sparks().is_empty());
}

#[test]
fn spark_is_drawn_at_its_cell() {
    let mut core = BackgroundCore::with_seed(EffectSettings::DEFAULT, 11);
    core.on_resize(0.0, 0.0);
    core.on_click(130.0, 80.0, 5.0, 5.0);

    let mut surface = DrawList::new(0, 0);
    core.paint(&mut surface);
    let fills: Vec<_> = surface.fills().collect();
    assert_eq!(fills.len(), 1);
    let (x, y, w, h, color) = fills[0];
    assert_eq!((x, y, w, h), (125.0, 75.0, 25.0, 25.0));
    assert_eq!(color.to_css(), "hsla(320, 100%, 80%, 0.98)");
}

#[test]
fn sparks_expire_independently() {
    let mut core = BackgroundCore::with_seed(EffectSettings::DEFAULT, 11);
    core.on_resize(0.0, 0.0);
    let mut surface = DrawList::new(0, 0);

    core.spark_at_local(0.0, 0.0);
    for _ in 0..20 {
        core.paint(&mut surface);
    }
    core.spark_at_local(50.0, 50.0);
    assert_eq!(core.sparks().len(), 2);

    for _ in 0..30 {
        core.paint(&mut surface);
    }
    // first spark: 50 ticks, gone; second: 30 ticks, 20 left
    assert_eq!(core.sparks().len(), 1);
    let remaining: Vec<u32> = core.sparks().iter().map(|s| s.remaining).collect();
    assert_eq!(remaining, vec![20]);
}
