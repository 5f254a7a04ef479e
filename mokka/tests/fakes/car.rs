use std::cell::Cell;
use std::rc::Rc;

use mokka::matcher::eq;

use crate::domain::{Car, EngineError, LengthUnit, SpeedUnit};
use crate::fakes::{BatteryFake, EngineFake};

fn car() -> Car<EngineFake, BatteryFake> {
    Car::new(EngineFake::default(), BatteryFake::default())
}

#[test]
fn turning_on_the_car_turns_on_the_engine() {
    let car = car();

    assert_eq!(car.turn_on(), Ok(()));
    assert!(car.engine().turn_on.called_once());
}

#[test]
fn turning_on_fails_without_gas() {
    let car = car();
    car.engine().turn_on.configure_failure(EngineError::OutOfGas);

    assert_eq!(car.turn_on(), Err(EngineError::OutOfGas));
    assert!(car.engine().turn_on.called());
}

#[test]
fn parking_turns_off_a_running_engine() {
    let car = car();
    car.engine().is_on.set_current_value(true);

    car.park();

    assert!(car.engine().is_on.has_been_read());
    assert!(car.engine().turn_off.called_once());
}

#[test]
fn parking_leaves_a_stopped_engine_alone() {
    let car = car();
    car.engine().is_on.set_current_value(false);

    car.park();

    assert!(!car.engine().turn_off.called());
}

#[test]
#[should_panic(expected = "No value for property 'is_on'")]
fn parking_with_unarranged_engine_state() {
    car().park();
}

#[test]
fn accelerate_increases_speed_by_5_kilometers_per_hour() {
    let car = car();
    car.engine().current_speed.returns(50.0);

    car.accelerate();

    assert!(car.engine().set_speed.called());
    assert_eq!(car.engine().set_speed.argument(), Some(55.0));
    assert_eq!(
        car.engine().current_speed.argument(),
        Some(SpeedUnit::KilometersPerHour)
    );
}

#[test]
fn accelerate_twice_increases_speed_by_10_kilometers_per_hour() {
    let car = car();
    let speed = Rc::new(Cell::new(50.0f32));

    let s = speed.clone();
    car.engine().current_speed.returns_with(move |_| s.get());
    let s = speed.clone();
    car.engine().set_speed.stub(move |value| s.set(value));

    car.accelerate();
    car.accelerate();

    assert_eq!(car.engine().set_speed.call_count(), 2);
    assert_eq!(car.engine().set_speed.argument(), Some(60.0));
    assert_eq!(speed.get(), 60.0);
}

#[test]
fn accelerate_does_not_exceed_max_speed() {
    let car = car();
    car.engine().current_speed.returns(180.0);

    car.accelerate();

    assert!(!car.engine().set_speed.called());
}

#[test]
fn current_speed_is_read_in_kilometers_per_hour() {
    let car = car();
    car.engine()
        .current_speed
        .returns_when(31.1, eq(SpeedUnit::MilesPerHour));
    car.engine()
        .current_speed
        .returns_when(49.6, eq(SpeedUnit::KilometersPerHour));

    assert_eq!(car.current_speed(), 50);
}

#[test]
#[should_panic(expected = "No return value for function 'current_speed(unit)'")]
fn current_speed_without_matching_stub() {
    let car = car();
    car.engine()
        .current_speed
        .returns_when(31.1, eq(SpeedUnit::MilesPerHour));

    car.current_speed();
}

#[test]
fn cruise_passes_value_and_unit() {
    let car = car();

    car.cruise(100.0, SpeedUnit::MilesPerHour);

    assert_eq!(
        car.engine().set_speed_in.last_arguments(),
        Some((100.0, SpeedUnit::MilesPerHour))
    );
}

#[test]
fn range_for_large_battery_in_kilometers() {
    let car = car();
    car.battery().capacity.set_current_value(90.0);
    car.battery().current_level.set_current_value(0.5);

    let range = car.remaining_range(LengthUnit::Kilometers);

    assert!((range - 250.0).abs() < 0.01);
    assert!(car.battery().capacity.has_been_read());
    assert!(car.battery().current_level.has_been_read());
}

#[test]
fn range_for_small_battery_in_miles() {
    let car = car();
    car.battery().capacity.set_current_value(40.0);
    car.battery().current_level.set_current_value(0.3);

    let range = car.remaining_range(LengthUnit::Miles);

    assert!((range - 41.42).abs() < 0.01);
}

#[test]
fn resetting_every_recorder_of_the_engine() {
    let car = car();
    car.engine().current_speed.returns(50.0);
    car.engine().is_on.set_current_value(true);
    car.accelerate();
    car.park();

    for recorder in car.engine().recorders() {
        recorder.reset();
    }

    let engine = car.engine();
    assert!(!engine.set_speed.called());
    assert!(!engine.turn_off.called());
    assert!(!engine.current_speed.called());
    assert_eq!(engine.current_speed.stub_count(), 0);
    assert_eq!(engine.is_on.current_value(), None);
    assert!(!engine.is_on.has_been_read());
}
