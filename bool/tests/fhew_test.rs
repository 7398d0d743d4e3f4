use fhew::{
    Decryptor, Encryptor, EvaluationKey, Evaluator, FHEError, Gate, KeyGen, DEFAULT_PARAMETERS,
    TOY_CGGI_PARAMETERS, TOY_DM_PARAMETERS,
};
use fhe_core::{ConstParameters, Parameters};
use rand::prelude::*;
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;

const TRIALS: usize = 100;

fn check_all_gates(params: Parameters) {
    let mut rng = thread_rng();

    let (sk, ek) = KeyGen::generate_keys(params, &mut rng).unwrap();
    let evaluator = Evaluator::from(ek);
    let encryptor = Encryptor::new(&sk);
    let decryptor = Decryptor::new(&sk);

    for gate in Gate::ALL {
        let mut correct = 0;
        for _ in 0..TRIALS {
            let (m0, m1): (bool, bool) = (rng.gen(), rng.gen());
            let c0 = encryptor.encrypt(m0, &mut rng);
            let c1 = encryptor.encrypt(m1, &mut rng);

            let c2 = evaluator.evaluate(gate, &c0, &c1).unwrap();
            assert_eq!(c2.dimension(), sk.parameters().lwe_dimension());
            if decryptor.decrypt(&c2).unwrap() == gate.evaluate(m0, m1) {
                correct += 1;
            }
        }
        assert!(
            correct * 100 >= TRIALS * 95,
            "{gate}: {correct}/{TRIALS} correct"
        );
    }
}

#[test]
fn test_gates_dm() {
    check_all_gates(TOY_DM_PARAMETERS.clone());
}

#[test]
fn test_gates_cggi() {
    check_all_gates(TOY_CGGI_PARAMETERS.clone());
}

#[test]
fn test_not_is_exact() {
    let mut rng = thread_rng();
    let sk = KeyGen::generate_secret_key(TOY_DM_PARAMETERS.clone(), &mut rng);
    let evaluator = Evaluator::new(&sk, &mut rng).unwrap();
    let encryptor = Encryptor::new(&sk);
    let decryptor = Decryptor::new(&sk);

    for _ in 0..200 {
        let m: bool = rng.gen();
        let c = encryptor.encrypt(m, &mut rng);
        let (_, noise) = decryptor.decrypt_with_noise(&c).unwrap();

        let not_c = evaluator.not(&c);
        let (not_m, not_noise) = decryptor.decrypt_with_noise(&not_c).unwrap();
        assert_eq!(not_m, !m);
        assert_eq!(not_noise, -noise);

        assert_eq!(decryptor.decrypt(&evaluator.not(&not_c)).unwrap(), m);
    }
}

#[test]
fn test_default_parameters() {
    let mut rng = thread_rng();
    let (sk, ek) = KeyGen::generate_keys(DEFAULT_PARAMETERS.clone(), &mut rng).unwrap();
    let evaluator = Evaluator::from(ek);
    let encryptor = Encryptor::new(&sk);
    let decryptor = Decryptor::new(&sk);

    let one = encryptor.encrypt(true, &mut rng);
    let zero = encryptor.encrypt(false, &mut rng);

    let and = evaluator.and(&one, &zero).unwrap();
    let or = evaluator.or(&one, &zero).unwrap();
    let xor = evaluator.xor(&one, &zero).unwrap();
    let not = evaluator.not(&one);

    assert!(!decryptor.decrypt(&and).unwrap());
    assert!(decryptor.decrypt(&or).unwrap());
    assert!(decryptor.decrypt(&xor).unwrap());
    assert!(!decryptor.decrypt(&not).unwrap());

    // bootstrapped outputs stay far from the decision boundary
    let bound = DEFAULT_PARAMETERS.ring_modulus().fraction(1, 16) as i64;
    for c in [&and, &or, &xor] {
        let (_, noise) = decryptor.decrypt_with_noise(c).unwrap();
        assert!(noise.abs() < bound);
    }

    // outputs live mod Q, NOT still applies
    assert!(decryptor.decrypt(&evaluator.not(&and)).unwrap());
}

#[test]
fn test_chaining_with_modulus_switch() {
    let mut rng = thread_rng();
    let params = Parameters::new(ConstParameters {
        modulus_switch: true,
        ..fhew::CONST_TOY_CGGI_PARAMETERS
    })
    .unwrap();
    let lwe_modulus = params.lwe_modulus();

    let (sk, ek) = KeyGen::generate_keys(params, &mut rng).unwrap();
    let evaluator = Evaluator::from(ek);
    let encryptor = Encryptor::new(&sk);
    let decryptor = Decryptor::new(&sk);

    for _ in 0..20 {
        let (a, b, c): (bool, bool, bool) = (rng.gen(), rng.gen(), rng.gen());
        let ca = encryptor.encrypt(a, &mut rng);
        let cb = encryptor.encrypt(b, &mut rng);
        let cc = encryptor.encrypt(c, &mut rng);

        // (a nand b) xor !c
        let t0 = evaluator.nand(&ca, &cb).unwrap();
        assert_eq!(t0.modulus(), lwe_modulus);
        let t1 = evaluator.not(&cc);
        let out = evaluator.xor(&t0, &t1).unwrap();

        assert_eq!(decryptor.decrypt(&out).unwrap(), !(a & b) ^ !c);
    }
}

#[test]
fn test_gate_rejects_unswitched_input() {
    let mut rng = thread_rng();
    let (sk, ek) = KeyGen::generate_keys(TOY_DM_PARAMETERS.clone(), &mut rng).unwrap();
    let evaluator = Evaluator::from(ek);
    let encryptor = Encryptor::new(&sk);

    let c0 = encryptor.encrypt(true, &mut rng);
    let c1 = evaluator.and(&c0, &c0).unwrap();
    assert_eq!(c1.modulus(), TOY_DM_PARAMETERS.ring_modulus());

    assert!(matches!(
        evaluator.or(&c0, &c1),
        Err(FHEError::CiphertextNotAccepted {
            modulus: 1032193,
            expected_modulus: 256,
            ..
        })
    ));
}

#[test]
fn test_concurrent_evaluation() {
    let mut rng = thread_rng();
    let (sk, ek) = KeyGen::generate_keys(TOY_CGGI_PARAMETERS.clone(), &mut rng).unwrap();
    let evaluator = Evaluator::from(ek);
    let encryptor = Encryptor::new(&sk);
    let decryptor = Decryptor::new(&sk);

    let inputs: Vec<_> = (0..32)
        .map(|_| {
            let (m0, m1): (bool, bool) = (rng.gen(), rng.gen());
            (
                m0 ^ m1,
                encryptor.encrypt(m0, &mut rng),
                encryptor.encrypt(m1, &mut rng),
            )
        })
        .collect();

    let correct = inputs
        .par_iter()
        .filter(|(expected, c0, c1)| {
            let c = evaluator.xor(c0, c1).unwrap();
            decryptor.decrypt(&c).unwrap() == *expected
        })
        .count();
    assert!(correct >= 30);
}

#[test]
fn test_evaluation_key_serde() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let (sk, ek) = KeyGen::generate_keys(TOY_CGGI_PARAMETERS.clone(), &mut rng).unwrap();

    let bytes = bincode::serialize(&ek).unwrap();
    let restored: EvaluationKey = bincode::deserialize(&bytes).unwrap();
    assert_eq!(bincode::serialize(&restored).unwrap(), bytes);

    let evaluator = Evaluator::from(restored);
    let encryptor = Encryptor::new(&sk);
    let decryptor = Decryptor::new(&sk);
    let c0 = encryptor.encrypt(true, &mut rng);
    let c1 = encryptor.encrypt(true, &mut rng);
    let c = evaluator.nor(&c0, &c1).unwrap();
    assert!(!decryptor.decrypt(&c).unwrap());
}
