//! Calls the exported C entry points through raw pointers, including NULL.

use std::ffi::CString;
use std::ptr;

use aquant_abi::array_abi::{array_max, array_min, array_sum, sort_array};
use aquant_abi::pair_abi::{array_has_pair_difference, array_has_pair_product, array_has_pair_sum};
use aquant_abi::string_abi::find_string;
use libc::{c_char, c_int, c_longlong};

#[test]
fn pair_detectors_via_abi() {
    let arr: [c_int; 5] = [1, 4, 5, 7, 9];
    unsafe {
        assert!(array_has_pair_sum(arr.as_ptr(), arr.len(), 10));
        assert!(!array_has_pair_sum(arr.as_ptr(), arr.len(), 100));
        assert!(array_has_pair_product(arr.as_ptr(), arr.len(), 35));
        assert!(array_has_pair_difference(arr.as_ptr(), arr.len(), 4));
        assert!(!array_has_pair_difference(arr.as_ptr(), 1, 0));
    }
}

#[test]
fn null_array_means_no_pair() {
    unsafe {
        assert!(!array_has_pair_sum(ptr::null(), 10, 0));
        assert!(!array_has_pair_product(ptr::null(), 10, 0));
        assert!(!array_has_pair_difference(ptr::null(), 10, 0));
    }
}

#[test]
fn max_min_sum_report_through_out_params() {
    let arr: [c_int; 4] = [3, -8, i32::MAX, 0];
    let mut out: c_int = 0;
    let mut total: c_longlong = 0;
    unsafe {
        assert!(array_max(arr.as_ptr(), arr.len(), &mut out));
        assert_eq!(out, i32::MAX);
        assert!(array_min(arr.as_ptr(), arr.len(), &mut out));
        assert_eq!(out, -8);
        assert!(array_sum(arr.as_ptr(), arr.len(), &mut total));
        assert_eq!(total, i64::from(i32::MAX) - 5);
    }
}

#[test]
fn reductions_reject_null_and_empty() {
    let arr: [c_int; 1] = [1];
    let mut out: c_int = 77;
    let mut total: c_longlong = 77;
    unsafe {
        assert!(!array_max(ptr::null(), 3, &mut out));
        assert!(!array_min(arr.as_ptr(), 0, &mut out));
        assert!(!array_max(arr.as_ptr(), 1, ptr::null_mut()));
        assert_eq!(out, 77);

        assert!(!array_sum(arr.as_ptr(), 1, ptr::null_mut()));
        assert!(!array_sum(ptr::null(), 2, &mut total));
        assert_eq!(total, 77);
        assert!(array_sum(ptr::null(), 0, &mut total));
        assert_eq!(total, 0);
    }
}

#[test]
fn sort_in_place_and_null_is_noop() {
    let mut arr: [c_int; 5] = [5, -1, 3, i32::MIN, 3];
    unsafe {
        sort_array(arr.as_mut_ptr(), arr.len());
        sort_array(ptr::null_mut(), 4);
    }
    assert_eq!(arr, [i32::MIN, -1, 3, 3, 5]);
}

#[test]
fn find_string_handles_null_entries() {
    let alice = CString::new("alice").unwrap();
    let bob = CString::new("bob").unwrap();
    let names: [*const c_char; 3] = [alice.as_ptr(), ptr::null(), bob.as_ptr()];
    unsafe {
        assert_eq!(find_string(names.as_ptr(), names.len(), bob.as_ptr()), 2);
        assert_eq!(find_string(names.as_ptr(), names.len(), ptr::null()), 1);
        assert_eq!(find_string(names.as_ptr(), 1, bob.as_ptr()), -1);
        assert_eq!(find_string(ptr::null(), 3, alice.as_ptr()), -1);
    }
}
