use approx::assert_relative_eq;
use raylet_engine::core::colour::ColourRgb;
use raylet_engine::core::types::*;
use raylet_engine::shared::{math, rng};

mod common;

#[test]
pub fn known_colours() {
    assert_eq!(Colour::default(), ColourRgb::BLACK);
    assert_eq!(ColourRgb::WHITE.0, [1.; 3]);
    assert_eq!((ColourRgb::RED.r(), ColourRgb::RED.g(), ColourRgb::RED.b()), (1., 0., 0.));
    assert_eq!((ColourRgb::GREEN.r(), ColourRgb::GREEN.g(), ColourRgb::GREEN.b()), (0., 1., 0.));
    assert_eq!((ColourRgb::BLUE.r(), ColourRgb::BLUE.g(), ColourRgb::BLUE.b()), (0., 0., 1.));
    assert_eq!(ColourRgb::RED + ColourRgb::GREEN + ColourRgb::BLUE, ColourRgb::WHITE);
    assert_eq!(ColourRgb::CHANNEL_COUNT, 3);
}

#[test]
pub fn elementwise_operators() {
    let a = Colour::new([0.2, 0.4, 0.6]);
    let b = Colour::new([0.5, 0.5, 0.5]);

    assert_relative_eq!(a + b, Colour::new([0.7, 0.9, 1.1]), epsilon = common::EPSILON);
    assert_relative_eq!(a - b, Colour::new([-0.3, -0.1, 0.1]), epsilon = common::EPSILON);
    assert_relative_eq!(a * b, Colour::new([0.1, 0.2, 0.3]), epsilon = common::EPSILON);
    assert_relative_eq!(a / b, Colour::new([0.4, 0.8, 1.2]), epsilon = common::EPSILON);
    assert_eq!(a * 2., 2. * a);
    assert_relative_eq!(a / 2., Colour::new([0.1, 0.2, 0.3]), epsilon = common::EPSILON);

    let mut c = a;
    c += b;
    c *= 2.;
    assert_relative_eq!(c, Colour::new([1.4, 1.8, 2.2]), epsilon = common::EPSILON);
    assert_eq!(b, Colour::new([0.5, 0.5, 0.5]));
}

#[test]
pub fn forwarded_functions() {
    let c = Colour::new([-0.5, 0.25, 1.5]);
    assert_eq!(c.clamp(0., 1.), Colour::new([0., 0.25, 1.]));
    assert_eq!(c.abs(), Colour::new([0.5, 0.25, 1.5]));
    assert_eq!(c.max(0.), Colour::new([0., 0.25, 1.5]));
    assert_eq!(c.min(1.), Colour::new([-0.5, 0.25, 1.]));
    assert_eq!(Colour::new([0.25, 1., 4.]).sqrt(), Colour::new([0.5, 1., 2.]));
    assert_eq!(Colour::new([0.5, 1., 3.]).powf(2.), Colour::new([0.25, 1., 9.]));
}

#[test]
pub fn map_assign_acts_in_place() {
    let mut c = Colour::new([0.25, 0.5, 1.]);
    c.map_assign(|x| *x = 1. - *x);
    assert_eq!(c, Colour::new([0.75, 0.5, 0.]));
}

#[test]
pub fn converts_to_and_from_vectors() {
    let v = Vector3::new(0.1, 0.2, 0.3);
    let c = Colour::from(v);
    assert_eq!(c.0, [0.1, 0.2, 0.3]);
    assert_eq!(Vector3::from(c), v);
    assert_eq!(<(Channel, Channel, Channel)>::from(c), (0.1, 0.2, 0.3));
}

#[test]
pub fn lerp_blends_between_endpoints() {
    let blue = Colour::new([0.5, 0.7, 1.0]);
    assert_eq!(math::lerp(Colour::WHITE, blue, 0.), Colour::WHITE);
    assert_eq!(math::lerp(Colour::WHITE, blue, 1.), blue);
    assert_relative_eq!(math::lerp(Colour::WHITE, blue, 0.5), Colour::new([0.75, 0.85, 1.0]), epsilon = common::EPSILON);
}

#[test]
pub fn random_colours_stay_in_range() {
    let mut rng = common::rng();
    for _ in 0..common::SAMPLES {
        let col = rng::colour_rgb_range(&mut rng, 0.2..0.8);
        assert!(col.into_iter().all(|c| (0.2..0.8).contains(&c)), "{col:?}");
    }
}

#[test]
pub fn display_and_serde() {
    let c = Colour::new([0.5, 0.25, 1.]);
    assert_eq!(c.to_string(), "0.5 0.25 1");
    let json = serde_json::to_string(&c).expect("serialise");
    assert_eq!(json, "[0.5,0.25,1.0]");
    assert_eq!(serde_json::from_str::<Colour>(&json).expect("deserialise"), c);
}
