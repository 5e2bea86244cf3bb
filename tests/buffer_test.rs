use llic::buffer::{Buffer, INITIAL_CAPACITY};

#[test]
fn test_append_past_capacity_keeps_order() {
    let mut b = Buffer::new();
    let total = b.capacity() + 1;
    for n in 0..total {
        b.append(n * 3).unwrap();
        assert_eq!(b.len(), n + 1);
        assert!(b.len() <= b.capacity());
    }
    for n in 0..total {
        assert_eq!(b.get(n), Some(&(n * 3)));
    }
    assert_eq!(b.get(total), None);
}

#[test]
fn test_growth_doubles_repeatedly() {
    let mut b = Buffer::new();
    let mut seen = vec![b.capacity()];
    for n in 0..INITIAL_CAPACITY * 8 + 1 {
        b.append(n as u8).unwrap();
        if seen.last() != Some(&b.capacity()) {
            seen.push(b.capacity());
        }
    }
    assert_eq!(seen, [32, 64, 128, 256, 512]);
}

#[test]
fn test_extend_stops_at_limit() {
    let mut b = Buffer::with_limit(3, "FULL");
    let e = b.extend_from_slice(&[1, 2, 3, 4, 5]).unwrap_err();
    assert!(e.is_out_of_memory());
    assert_eq!(b.as_slice(), &[1, 2, 3]);
    assert_eq!(b.limit(), Some(3));
}

#[test]
fn test_from_text() {
    let b = Buffer::from_text(".NOP").unwrap();
    assert_eq!(b.as_slice(), b".NOP");
    let collected: Vec<u8> = b.into_iter().collect();
    assert_eq!(collected, b".NOP");
}
