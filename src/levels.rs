use crate::level_data::LevelData;

/// Built-in first level, used when no level file is configured or loading
/// fails.
pub fn introduction() -> LevelData {
    LevelData::from_lines(
        "Gentle Introduction",
        &[
            "####################",
            "#                | #",
            "# ############## + #",
            "#k               | X",
            "######-+-###########",
            "# | #         #k   #",
            "# O #####-O-# #### #",
            "#1|         #      #",
            "####################",
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    #[test]
    fn introduction_builds() {
        let data = introduction();
        let level = data.build();
        assert_eq!(level.rows, 9);
        assert_eq!(level.cols, 20);
        assert_eq!(level.keys_count, 2);
        assert_eq!(level.get_cell(3, 19), Some(Cell::Exit));
        // The keyed vertical door guarding the exit corridor.
        assert_eq!(
            level.get_cell(2, 17),
            Some(Cell::Door { vertical: true, key_is_needed: true })
        );
        // The keyless horizontal door in the lower rooms.
        assert_eq!(
            level.get_cell(6, 10),
            Some(Cell::Door { vertical: false, key_is_needed: false })
        );
    }
}
