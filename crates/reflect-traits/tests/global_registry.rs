//! The process-wide registry can be installed exactly once.

use reflect_traits::{TypeContext, TypeError, TypeRegistry};

#[test]
fn test_install_global_once() {
    assert!(TypeRegistry::global().is_none());

    let mut ctx = TypeContext::new();
    let base = ctx.declare_class("Base", &[]).unwrap();
    let derived = ctx.declare_class("Derived", &[base]).unwrap();
    let registry = ctx.freeze().unwrap();

    let installed = registry.clone().install().unwrap();
    assert!(installed.is_derived(&[derived, base]));

    let global = TypeRegistry::global().unwrap();
    assert_eq!(global.lookup("Derived"), Some(derived));

    let second = TypeContext::new().freeze().unwrap();
    assert_eq!(second.install().unwrap_err(), TypeError::AlreadyInstalled);
}
