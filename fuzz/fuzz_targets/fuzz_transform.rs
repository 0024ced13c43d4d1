#![no_main]

use libfuzzer_sys::fuzz_target;
use mindsystem_install::domain::value_objects::ContentTransform;
use mindsystem_install::InstallScope;

fuzz_target!(|data: &[u8]| {
    // Rewriting must be stable: applying twice equals applying once.
    let transform = ContentTransform::for_install(InstallScope::Local, None);
    let once = transform.apply(data).into_owned();
    let twice = transform.apply(&once).into_owned();
    assert_eq!(once, twice);
});
