/// Bitmask role check.
///
/// Role ids are 1-indexed bit positions in a mask sized to the live role
/// count, so the mask widens as roles are added to the system. The caller
/// passes if any required bit overlaps their own.
pub fn authorize(caller_role_id: i32, required_role_ids: &[i32], total_roles: usize) -> bool {
    let caller = match role_bit(caller_role_id, total_roles) {
        Some(bit) => bit,
        None => return false,
    };

    let mut required: u64 = 0;
    for &role_id in required_role_ids {
        match role_bit(role_id, total_roles) {
            Some(bit) => required |= bit,
            None => return false,
        }
    }

    caller & required != 0
}

// A width of zero or an id outside the width denies rather than guesses.
fn role_bit(role_id: i32, total_roles: usize) -> Option<u64> {
    if total_roles == 0 || total_roles > u64::BITS as usize {
        return None;
    }
    if role_id < 1 || role_id as usize > total_roles {
        return None;
    }
    Some(1u64 << (role_id - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_overlapping_role_passes() {
        // caller 2 = 10, required {1,2} = 11
        assert!(authorize(2, &[1, 2], 2));
        // caller 1 = 001, required {1,3} = 101
        assert!(authorize(1, &[1, 3], 3));
    }

    #[test]
    fn disjoint_roles_fail() {
        // caller 1 = 01, required {2} = 10
        assert!(!authorize(1, &[2], 2));
        assert!(!authorize(3, &[1, 2], 3));
    }

    #[test]
    fn fails_closed_on_bad_width() {
        assert!(!authorize(1, &[1], 0));
        assert!(!authorize(3, &[1], 2)); // caller beyond the live role count
        assert!(!authorize(1, &[3], 2)); // requirement beyond the live role count
    }

    #[test]
    fn fails_closed_on_degenerate_input() {
        assert!(!authorize(0, &[1], 2));
        assert!(!authorize(-1, &[1], 2));
        assert!(!authorize(1, &[], 2)); // nothing required means nothing granted
    }
}
