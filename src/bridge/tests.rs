use super::*;
use crate::config::{DispatchConfig, MarkerClasses};
use crate::dispatch::resolver::lock_slot_for_test;
use crate::dispatch::{register_resolver, ResolverReply, VectorResolver};
use crate::error::VctypeError;
use crate::traits::ClassifiableValue;
use crate::types::{HostValue, TypeTag, VectorType};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Resolver that answers `true` only for values inheriting `"my_vec"`.
fn install_class_resolver() -> Arc<AtomicUsize> {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let resolver: Arc<dyn VectorResolver> = Arc::new(move |value: &dyn ClassifiableValue| {
        seen.fetch_add(1, Ordering::SeqCst);
        ResolverReply::from(value.inherits("my_vec"))
    });
    register_resolver(resolver);
    calls
}

//==================================================================================
// 1. Built-in kinds
//==================================================================================

#[test]
fn test_atomic_vectors_are_vectors() {
    let _guard = lock_slot_for_test();
    let cases = [
        (HostValue::logical(), TypeTag::Logical),
        (HostValue::integer(), TypeTag::Integer),
        (HostValue::double(), TypeTag::Double),
        (HostValue::character(), TypeTag::Character),
        (HostValue::raw(), TypeTag::Raw),
    ];
    for (value, tag) in cases {
        assert_eq!(vec_type(&value).tag(), tag);
        assert!(is_vector(&value).unwrap(), "{} should be a vector", tag);
    }
}

#[test]
fn test_complex_is_classified_as_double_and_is_a_vector() {
    let _guard = lock_slot_for_test();
    let complex = HostValue::complex();
    assert_eq!(vec_type(&complex), vec_type(&HostValue::double()));
    assert!(is_vector(&complex).unwrap());
}

#[test]
fn test_bare_list_and_data_frame() {
    let _guard = lock_slot_for_test();
    let list = HostValue::list();
    assert_eq!(vec_type(&list), VectorType::List);
    assert!(is_vector(&list).unwrap());

    let df = HostValue::data_frame();
    assert_eq!(vec_type(&df), VectorType::DataFrame);
    assert!(is_data_frame(&df));
    assert!(is_vector(&df).unwrap());
}

#[test]
fn test_opaque_scalar_is_not_a_vector() {
    let _guard = lock_slot_for_test();
    let value = HostValue::other().with_class(["environment"]);
    assert_eq!(vec_type(&value), VectorType::OpaqueScalar);
    assert!(!is_vector(&value).unwrap());
}

#[test]
fn test_builtin_kinds_never_reach_the_resolver() {
    let _guard = lock_slot_for_test();
    let calls = install_class_resolver();
    for value in [HostValue::integer(), HostValue::data_frame(), HostValue::other()] {
        is_vector(&value).unwrap();
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

//==================================================================================
// 2. Marker predicates
//==================================================================================

#[test]
fn test_is_data_frame_is_a_direct_class_check() {
    // A data.frame class on a non-sequence is still reported by the marker check.
    let odd = HostValue::integer().with_class(["data.frame"]);
    assert!(is_data_frame(&odd));
    assert_eq!(vec_type(&odd), VectorType::Integer);
    assert!(!is_data_frame(&HostValue::list()));
}

#[test]
fn test_is_record_accepts_both_markers() {
    let rcrd = HostValue::list().with_class(["vctrs_rcrd", "vctrs_vctr"]);
    let posixlt = HostValue::list().with_class(["POSIXlt", "POSIXt"]);
    let posixct = HostValue::double().with_class(["POSIXct", "POSIXt"]);
    assert!(is_record(&rcrd));
    assert!(is_record(&posixlt));
    assert!(!is_record(&posixct));
    assert!(!is_record(&HostValue::list()));
}

#[test]
fn test_is_scalar() {
    let sclr = HostValue::list().with_class(["my_sclr", "vctrs_sclr"]);
    assert!(is_scalar(&sclr));
    assert!(!is_scalar(&HostValue::other()));
}

//==================================================================================
// 3. Extensible values
//==================================================================================

#[test]
fn test_base_vector_marker_bypasses_resolver() {
    let _guard = lock_slot_for_test();
    let calls = install_class_resolver();
    let value = HostValue::list().with_class(["percent", "vctrs_vctr"]);
    assert_eq!(vec_type(&value).tag(), TypeTag::Extensible);
    assert!(is_vector(&value).unwrap());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_resolver_decides_other_extensible_values() {
    let _guard = lock_slot_for_test();
    let calls = install_class_resolver();
    let yes = HostValue::list().with_class(["my_vec"]);
    let no = HostValue::list().with_class(["lm"]);
    assert!(is_vector(&yes).unwrap());
    assert!(!is_vector(&no).unwrap());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_non_boolean_reply_is_a_contract_violation() {
    let _guard = lock_slot_for_test();
    let resolver: Arc<dyn VectorResolver> = Arc::new(|_: &dyn ClassifiableValue| {
        ResolverReply::Other("a character vector of length 1".to_string())
    });
    register_resolver(resolver);

    let value = HostValue::list().with_class(["foo"]);
    let err = is_vector(&value).unwrap_err();
    assert!(matches!(err, VctypeError::ContractViolation(_)));
    assert!(err.to_string().contains("must return `TRUE` or `FALSE`"));
}

#[test]
fn test_missing_reply_is_a_contract_violation() {
    let _guard = lock_slot_for_test();
    let resolver: Arc<dyn VectorResolver> =
        Arc::new(|_: &dyn ClassifiableValue| ResolverReply::Missing);
    register_resolver(resolver);

    let value = HostValue::list().with_class(["foo"]);
    assert!(matches!(
        is_vector(&value),
        Err(VctypeError::ContractViolation(_))
    ));
}

#[test]
fn test_resolver_can_inspect_arrow_data() {
    use arrow::array::{Array, ArrayRef, Int32Array};

    let _guard = lock_slot_for_test();
    let resolver: Arc<dyn VectorResolver> = Arc::new(|value: &dyn ClassifiableValue| {
        ResolverReply::from(value.as_arrow().map_or(false, |array| array.len() > 2))
    });
    register_resolver(resolver);

    let long: ArrayRef = Arc::new(Int32Array::from(vec![1, 2, 3]));
    let short: ArrayRef = Arc::new(Int32Array::from(vec![1]));
    let struct_of = |array: ArrayRef| {
        Arc::new(arrow::array::StructArray::from(vec![(
            Arc::new(arrow::datatypes::Field::new("x", arrow::datatypes::DataType::Int32, false)),
            array,
        )])) as ArrayRef
    };

    let long = ArrowValue::new(struct_of(long)).with_class(["my_rcrd"]);
    let short = ArrowValue::new(struct_of(short)).with_class(["my_rcrd"]);
    assert!(is_vector(&long).unwrap());
    assert!(!is_vector(&short).unwrap());
    // Values without Arrow storage give the resolver nothing to inspect.
    assert!(!is_vector(&HostValue::list().with_class(["my_rcrd"])).unwrap());
}

#[test]
fn test_extensible_without_resolver_fails() {
    let _guard = lock_slot_for_test();
    let value = HostValue::list().with_class(["foo"]);
    assert!(matches!(
        is_vector(&value),
        Err(VctypeError::UnregisteredResolver)
    ));
    // type_of never consults the resolver.
    assert_eq!(type_of(&value), "s3");
}

//==================================================================================
// 4. require_vector & configured dispatch
//==================================================================================

#[test]
fn test_require_vector() {
    let _guard = lock_slot_for_test();
    install_class_resolver();

    assert_eq!(
        require_vector(&HostValue::character(), "vec_size").unwrap(),
        VectorType::Character
    );

    let err = require_vector(&HostValue::other(), "vec_size").unwrap_err();
    assert_eq!(err.to_string(), "Unsupported vctrs type `scalar` in `vec_size`");

    let err = require_vector(&HostValue::list().with_class(["lm"]), "vec_cast").unwrap_err();
    assert!(matches!(
        err,
        VctypeError::UnsupportedType { vec_type: TypeTag::Extensible, ref operation } if operation == "vec_cast"
    ));
}

#[test]
fn test_dispatcher_with_custom_markers() {
    let _guard = lock_slot_for_test();
    let config = DispatchConfig {
        markers: MarkerClasses {
            base_vector: "my_base".to_string(),
            record: "my_rcrd".to_string(),
            ..MarkerClasses::default()
        },
    };
    let dispatcher = Dispatcher::new(Arc::new(config));

    let value = HostValue::list().with_class(["thing", "my_base"]);
    assert!(dispatcher.is_vector(&value).unwrap());
    assert!(dispatcher.is_record(&HostValue::list().with_class(["my_rcrd"])));
    assert!(!dispatcher.is_record(&HostValue::list().with_class(["vctrs_rcrd"])));
    // The default base marker no longer short-circuits.
    assert!(matches!(
        dispatcher.is_vector(&HostValue::list().with_class(["vctrs_vctr"])),
        Err(VctypeError::UnregisteredResolver)
    ));
}

#[test]
fn test_dispatcher_config_is_shared() {
    let config = Arc::new(DispatchConfig::default());
    let a = Dispatcher::new(Arc::clone(&config));
    let b = a.clone();
    assert_eq!(a.config(), b.config());
    assert_eq!(Arc::strong_count(&config), 3);
}
