//! End-to-end page scenarios against the public API.

use std::cell::Cell;
use std::rc::Rc;

use pageboot::{
    Attributes, Config, Factory, Page, ReadyEvent, Registry, RegistryError, Scope, Unit,
    UnitError, UnitFn,
};

#[derive(Default)]
struct Flag {
    ran: bool,
}

impl Unit for Flag {
    fn init(&mut self) -> Result<(), UnitError> {
        self.ran = true;
        Ok(())
    }
}

/// Unit whose address is observable, to check the producer's object is reused.
struct Tagged {
    serial: u32,
    inits: u32,
}

impl Unit for Tagged {
    fn init(&mut self) -> Result<(), UnitError> {
        self.inits += 1;
        Ok(())
    }
}

#[test]
fn always_run_module_and_controller_both_run() {
    let mut reg = Registry::new();
    reg.register_module("nav", Factory::object(Flag::default()), Scope::Always)
        .unwrap();
    reg.register_controller("home", Factory::object(Flag::default()))
        .unwrap();

    reg.init(Vec::<&str>::new()).unwrap();
    reg.run("home").unwrap();

    for id in ["nav", "home"] {
        let rec = reg.get_unit(id).unwrap();
        assert!(rec.is_initialized(), "{id} should be initialized");
        assert!(rec.unit::<Flag>().unwrap().ran, "{id} should have run");
    }
}

#[test]
fn producer_object_is_reused_across_init_calls() {
    let serial = Rc::new(Cell::new(0u32));
    let mut reg = Registry::new();
    let counter = serial.clone();
    reg.register_module(
        "x",
        Factory::producer(move || {
            counter.set(counter.get() + 1);
            Tagged {
                serial: counter.get(),
                inits: 0,
            }
        }),
        Scope::Declared,
    )
    .unwrap();

    reg.init(["x"]).unwrap();
    let first = reg.get_unit("x").unwrap().unit::<Tagged>().unwrap() as *const Tagged;
    reg.init(["x"]).unwrap();
    let rec = reg.get_unit("x").unwrap();
    let second = rec.unit::<Tagged>().unwrap();

    assert_eq!(serial.get(), 1);
    assert_eq!(second.serial, 1);
    assert_eq!(second.inits, 2);
    assert!(std::ptr::eq(first, second));
}

#[test]
fn invoking_unregistered_identifier_changes_nothing() {
    let mut reg = Registry::new();
    reg.register_module("real", Factory::object(Flag::default()), Scope::Declared)
        .unwrap();

    reg.invoke("ghost").unwrap();

    assert!(reg.get_unit("ghost").is_none());
    assert_eq!(reg.identifiers(), vec!["real"]);
    assert!(reg.initialized().is_empty());
}

#[test]
fn registering_twice_fails_even_for_controller_alias() {
    let mut reg = Registry::new();
    reg.register_controller("home", Factory::object(Flag::default()))
        .unwrap();

    let err = reg
        .register_module("home", Factory::producer(Flag::default), Scope::Always)
        .unwrap_err();
    assert_eq!(err.as_label(), "registry_duplicate_identifier");
    assert!(reg.always_run().is_empty());
}

#[test]
fn reset_then_run_restarts_same_controller() {
    let mut reg = Registry::new();
    let unit = UnitFn::new(0u32)
        .on_init(|n: &mut u32| {
            *n += 1;
            Ok(())
        })
        .on_reset(|n: &mut u32| {
            *n += 100;
            Ok(())
        });
    reg.register_controller("home", Factory::object(unit)).unwrap();

    reg.run("home").unwrap();
    reg.run("home").unwrap();
    reg.reset("home").unwrap();
    reg.run("home").unwrap();

    let state = *reg
        .get_unit("home")
        .and_then(|rec| rec.unit::<UnitFn<u32>>())
        .unwrap()
        .state();
    assert_eq!(state, 102);
}

#[test]
fn reset_of_unknown_identifier_is_an_error() {
    let mut reg = Registry::new();
    assert!(matches!(
        reg.reset("nobody"),
        Err(RegistryError::UnknownUnit { .. })
    ));
}

#[test]
fn page_runs_declared_modules_before_controller() {
    let order = Rc::new(std::cell::RefCell::new(Vec::<String>::new()));
    let mut page = Page::new(Config::default());

    let recorder = |id: &'static str| {
        let order = order.clone();
        UnitFn::new(()).on_init(move |_: &mut ()| {
            order.borrow_mut().push(id.to_string());
            Ok(())
        })
    };

    let reg = page.registry_mut();
    reg.register_module("analytics", Factory::object(recorder("analytics")), Scope::Always)
        .unwrap();
    reg.register_module("nav", Factory::object(recorder("nav")), Scope::Declared)
        .unwrap();
    reg.register_module("gallery", Factory::object(recorder("gallery")), Scope::Declared)
        .unwrap();
    reg.register_controller("product", Factory::object(recorder("product")))
        .unwrap();

    let root = Attributes::new()
        .with("id", "product")
        .with("data-modules", "gallery nav missing");
    assert!(page.dispatch(ReadyEvent::DomContentLoaded, &root).unwrap());
    assert!(!page.dispatch(ReadyEvent::DomContentLoaded, &root).unwrap());

    assert_eq!(
        *order.borrow(),
        vec!["gallery", "nav", "analytics", "product"]
    );
}

#[test]
fn invalid_unit_stops_page_bootstrap() {
    let mut page = Page::new(Config {
        ready_event: ReadyEvent::Load,
        ..Config::default()
    });
    page.registry_mut()
        .register_module("hollow", Factory::object(UnitFn::new(())), Scope::Always)
        .unwrap();
    page.registry_mut()
        .register_controller("home", Factory::object(Flag::default()))
        .unwrap();

    let root = Attributes::new().with("id", "home");
    let err = page.dispatch(ReadyEvent::Load, &root).unwrap_err();

    assert!(matches!(err, RegistryError::InvalidUnit { ref id } if id == "hollow"));
    assert!(!page.registry().get_unit("home").unwrap().is_initialized());
}
