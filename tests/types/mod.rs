use monad_rail::{Encapsulate, Failure, List, Maybe, Monad};

mod failure;
mod monad;
mod nomad;

#[test]
fn every_container_chains_through_both_operators() {
    let monad = Monad::new(1) >> (|x: i32| x + 1) << (|x: i32| x * 10);
    assert_eq!(monad, Monad::new(20));

    let encapsulate = Encapsulate::new(1) >> (|x: i32| Ok(x + 1)) << (|x: i32| Ok(x * 10));
    assert_eq!(encapsulate.value(), Some(&20));

    let maybe = Maybe::some(1) >> (|x: i32| Some(x + 1)) << (|x: i32| Some(x * 10));
    assert_eq!(maybe.unwrap(), Some(20));

    let list = List::new([1, 2]) >> (|x: i32| x + 1) << (|x: i32| x * 10);
    assert_eq!(list.unwrap(), vec![20, 30]);
}

#[test]
fn display_matches_container_name() {
    assert_eq!(Monad::new(8).to_string(), "Monad(8)");
    assert_eq!(Maybe::some("x").to_string(), "Maybe(x)");
    assert_eq!(Maybe::<i32>::none().to_string(), "Maybe(None)");
    assert_eq!(Encapsulate::new(3).to_string(), "Encapsulate(3)");

    let failed = Encapsulate::<i32>::failed(Failure::msg("division by zero"));
    assert_eq!(failed.to_string(), "Encapsulate(division by zero)");
}

#[test]
#[cfg(feature = "serde")]
fn containers_round_trip_through_serde() {
    let monad = Monad::new(8);
    let json = serde_json::to_string(&monad).unwrap();
    assert_eq!(serde_json::from_str::<Monad<i32>>(&json).unwrap(), monad);

    let failed = Encapsulate::<i32, String>::failed("division by zero".to_string());
    let json = serde_json::to_string(&failed).unwrap();
    assert_eq!(serde_json::from_str::<Encapsulate<i32, String>>(&json).unwrap(), failed);

    let list = List::new([1, 2, 3, 4, 5]);
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(serde_json::from_str::<List<i32>>(&json).unwrap(), list);

    let maybe = Maybe::<i32>::none();
    let json = serde_json::to_string(&maybe).unwrap();
    assert_eq!(serde_json::from_str::<Maybe<i32>>(&json).unwrap(), maybe);
}
