use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use cgmath::{Matrix3, Rad, Vector3};
use cubedrill_notation::{is_double_turn, parse_notation, setup_sequence};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

fn lattice_after(notation: &str) -> Lattice {
    let mut lattice = Lattice::solved();
    lattice.apply_all(parse_notation(notation));
    lattice
}

fn affected_positions(token: &str) -> Vec<Vector3<i8>> {
    let lattice = Lattice::solved();
    let set = lattice.affected_by(&MoveDescriptor::resolve(token));
    set.iter().map(|id| lattice[id].position).collect()
}

#[test]
fn test_solved_layout() {
    let lattice = Lattice::solved();
    assert_eq!(lattice.cubies().len(), CUBIE_COUNT);
    assert!(lattice.is_solved());
    assert!(lattice.is_valid());
    // x-major order, center skipped
    assert_eq!(lattice[CubieId(0)].home, Vector3::new(-1, -1, -1));
    assert_eq!(lattice[CubieId(12)].home, Vector3::new(0, 0, -1));
    assert_eq!(lattice[CubieId(13)].home, Vector3::new(0, 0, 1));
    assert_eq!(lattice[CubieId(25)].home, Vector3::new(1, 1, 1));
}

#[test]
fn test_layer_selection_sizes() {
    let positions = affected_positions("R");
    assert_eq!(positions.len(), 9);
    assert!(positions.iter().all(|p| p.x == 1));

    // the core cubie isn't modeled, so a wide turn moves 9 + 8
    let positions = affected_positions("r");
    assert_eq!(positions.len(), 17);
    assert!(positions.iter().all(|p| p.x == 0 || p.x == 1));
    assert_eq!(affected_positions("Rw"), positions);

    let positions = affected_positions("M");
    assert_eq!(positions.len(), 8);
    assert!(positions.iter().all(|p| p.x == 0));

    assert_eq!(affected_positions("E").len(), 8);
    assert_eq!(affected_positions("S").len(), 8);
    assert_eq!(affected_positions("D'").len(), 9);
    assert_eq!(affected_positions("y").len(), 26);
    assert_eq!(
        Lattice::solved().affected_by(&MoveDescriptor::resolve("z'")),
        CubieSet::ALL,
    );
    assert!(affected_positions("Q").is_empty());
}

#[test]
fn test_r_turn_on_solved() {
    let lattice = lattice_after("R");
    let expected = Orientation::snapped(Matrix3::from_angle_x(Rad(-FRAC_PI_2)));

    for cubie in lattice.cubies() {
        let home = cubie.home;
        if home.x == 1 {
            // -90 degrees around X maps (x, y, z) to (x, z, -y)
            assert_eq!(cubie.position, Vector3::new(home.x, home.z, -home.y));
            assert_eq!(cubie.orientation, expected);
        } else {
            assert!(cubie.is_solved());
        }
    }
    // front-top goes to back-top
    assert_eq!(
        lattice.cubie_at(Vector3::new(1, 1, -1)).map(|c| c.home),
        Some(Vector3::new(1, 1, 1)),
    );
}

#[test]
fn test_unknown_token_is_no_op() {
    let mut lattice = Lattice::solved();
    assert!(!lattice.apply("Q"));
    assert!(!lattice.apply(""));
    assert!(lattice.is_solved());
    assert!(lattice.apply("U"));
    assert!(!lattice.is_solved());
}

#[test]
fn test_slice_and_rotation_equivalences() {
    assert_eq!(lattice_after("r"), lattice_after("R M'"));
    assert_eq!(lattice_after("x"), lattice_after("R M' L'"));
    assert_eq!(lattice_after("y"), lattice_after("U E' D'"));
    assert_eq!(lattice_after("z"), lattice_after("F S B'"));
    assert_eq!(lattice_after("l"), lattice_after("R x'"));
}

#[test]
fn test_sune_has_order_six() {
    let sune = "R U R' U R U2 R'";
    let mut lattice = Lattice::solved();
    for i in 1..=6 {
        lattice.apply_all(parse_notation(sune));
        assert_eq!(lattice.is_solved(), i == 6, "after {i} repetitions");
    }
}

#[test]
fn test_face_colors() {
    for face in [Face::R, Face::L, Face::U, Face::D, Face::F, Face::B] {
        assert_eq!(Lattice::solved().face_colors(face), [[face; 3]; 3]);
    }

    let lattice = lattice_after("R");
    let u = lattice.face_colors(Face::U);
    let f = lattice.face_colors(Face::F);
    for row in 0..3 {
        assert_eq!([u[row][0], u[row][1]], [Face::U; 2]);
        assert_eq!(u[row][2], Face::F);
        assert_eq!(f[row][2], Face::D);
    }
    assert_eq!(lattice.face_colors(Face::R), [[Face::R; 3]; 3]);
    // back face is viewed from behind, so its left column is on the right
    // side of the cube
    let b = lattice.face_colors(Face::B);
    assert!((0..3).all(|row| b[row][0] == Face::U && b[row][2] == Face::B));
}

#[test]
fn test_animated_twist() {
    let mut sim = CubeSimulation::new();
    let duration = Duration::from_millis(100);

    assert_eq!(sim.start_twist("R", duration), TwistRequest::Started);
    assert_eq!(sim.start_twist("U", duration), TwistRequest::Rejected);
    assert_eq!(sim.current_twist().map(|anim| anim.token()), Some("R"));

    let TwistProgress::InProgress(eased) = sim.step(Duration::from_millis(50)) else {
        panic!("twist should still be in flight");
    };
    assert!((eased - 0.875).abs() < 1e-5, "eased progress {eased}");
    assert!(sim.lattice().is_solved(), "lattice changed mid-twist");

    let frame = sim.frame().expect("animation frame");
    assert_eq!(frame.cubies.len(), 9);
    let expected = Matrix3::from_angle_x(Rad(-FRAC_PI_2 * eased));
    assert!((frame.rotation.y.y - expected.y.y).abs() < 1e-5);

    assert_eq!(
        sim.step(Duration::from_millis(60)),
        TwistProgress::Completed("R".to_owned()),
    );
    assert_eq!(sim.step(Duration::from_millis(16)), TwistProgress::Idle);
    assert_eq!(sim.frame(), None);
    assert_eq!(sim.lattice(), &lattice_after("R"));
    assert!(sim.lattice().is_valid());
}

#[test]
fn test_twist_no_op_and_zero_duration() {
    let mut sim = CubeSimulation::new();
    assert_eq!(sim.start_twist("Q", Duration::from_millis(100)), TwistRequest::NoOp);
    assert!(!sim.is_animating());

    assert!(sim.start_twist("F2", Duration::ZERO).is_started());
    assert_eq!(
        sim.step(Duration::ZERO),
        TwistProgress::Completed("F2".to_owned()),
    );
    assert_eq!(sim.lattice(), &lattice_after("F2"));
}

#[test]
fn test_synthetic_progress() {
    let mut sim = CubeSimulation::new();
    assert!(sim.start_twist("U", Duration::from_secs(1)).is_started());
    assert_eq!(sim.set_progress(0.0), TwistProgress::InProgress(0.0));

    assert!(matches!(sim.set_progress(0.5), TwistProgress::InProgress(_)));
    let moving = sim
        .cubie_transforms()
        .into_iter()
        .filter(|t| sim.lattice()[t.id].position.map(f32::from) != t.position)
        .count();
    // every top-layer cubie except the center moves
    assert_eq!(moving, 8);

    assert_eq!(sim.set_progress(2.0), TwistProgress::Completed("U".to_owned()));
    assert_eq!(sim.lattice(), &lattice_after("U"));
}

#[test]
fn test_instant_application_completes_twist_in_flight() {
    let mut sim = CubeSimulation::new();
    assert!(sim.start_twist("R", Duration::from_secs(1)).is_started());
    sim.apply_instant(["U"]);
    assert!(!sim.is_animating());
    assert_eq!(sim.lattice(), &lattice_after("R U"));

    assert!(sim.start_twist("F", Duration::from_secs(1)).is_started());
    sim.jump_to(["U"]);
    assert!(!sim.is_animating());
    assert_eq!(sim.lattice(), &lattice_after("U"));

    sim.reset();
    assert!(sim.lattice().is_solved());
    assert_eq!(sim.catch_up(), None);
}

const VALID_TOKENS: &[&str] = &[
    "R", "L", "U", "D", "F", "B", "R'", "L'", "U'", "D'", "F'", "B'", "R2", "L2", "U2", "D2",
    "F2", "B2", "M", "E", "S", "M'", "E'", "S'", "M2", "x", "y", "z", "x'", "y2", "r", "l'",
    "u2", "d", "f'", "b", "Rw", "Uw'", "Fw2",
];

fn token() -> impl Strategy<Value = String> {
    prop::sample::select(VALID_TOKENS).prop_map(str::to_owned)
}

proptest! {
    #[test]
    fn proptest_setup_then_solve_is_identity(moves in prop::collection::vec(token(), 0..30)) {
        let mut lattice = Lattice::solved();
        lattice.apply_all(setup_sequence(&moves));
        lattice.apply_all(&moves);
        prop_assert!(lattice.is_solved());
    }

    #[test]
    fn proptest_lattice_stays_valid(moves in prop::collection::vec(token(), 1..40)) {
        let mut lattice = Lattice::solved();
        for m in &moves {
            lattice.apply(m);
            prop_assert!(lattice.is_valid(), "invalid after {m}");
        }
    }

    #[test]
    fn proptest_order_closure(
        scramble in prop::collection::vec(token(), 0..10),
        m in token(),
    ) {
        let mut lattice = Lattice::solved();
        lattice.apply_all(&scramble);
        let before = lattice.clone();

        let order = if is_double_turn(&m) { 2 } else { 4 };
        for i in 1..=order {
            lattice.apply(&m);
            prop_assert_eq!(&lattice == &before, i == order);
        }
    }

    #[test]
    fn proptest_animation_matches_instant(
        moves in prop::collection::vec(token(), 1..10),
        frame_ms in 1_u64..50,
    ) {
        let mut sim = CubeSimulation::new();
        let mut lattice = Lattice::solved();
        for m in &moves {
            prop_assert!(sim.start_twist(m, Duration::from_millis(120)).is_started());
            while sim.step(Duration::from_millis(frame_ms)) != TwistProgress::Completed(m.clone()) {}
            lattice.apply(m);
        }
        prop_assert_eq!(sim.lattice(), &lattice);
    }
}
