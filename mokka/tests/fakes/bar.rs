use crate::domain::Bar;
use crate::fakes::FooFake;

fn bar() -> Bar<FooFake> {
    Bar::new(FooFake::default())
}

#[test]
fn multiplies_the_value_by_baz() {
    let bar = bar();
    bar.foo().do_something.returns(42);
    bar.foo().baz.set_current_value(3);

    assert_eq!(bar.do_something_with_foo(), 126);
    assert!(bar.foo().do_something.called_once());
    assert_eq!(bar.foo().do_something.argument(), Some("abc".to_owned()));
    assert!(bar.foo().baz.has_been_read());
    assert!(!bar.foo().baz.has_been_written());
}

#[test]
fn describe_reads_both_properties() {
    let bar = bar();
    bar.foo().readonly_baz.set_current_value("baz".into());
    bar.foo().baz.set_current_value(7);

    assert_eq!(bar.describe(), "baz=7");
}

#[test]
fn clear_writes_baz() {
    let bar = bar();

    bar.clear();

    assert!(bar.foo().baz.has_been_written());
    assert!(!bar.foo().baz.has_been_read());
    assert_eq!(bar.foo().baz.current_value(), Some(0));
}

#[test]
#[should_panic(expected = "No return value for function 'do_something(arg)'")]
fn unarranged_do_something() {
    let bar = bar();
    bar.foo().baz.set_current_value(3);

    bar.do_something_with_foo();
}
