//! Preferred network per size.
//!
//! Power-of-two sizes and sizes above 32 use a bitonic network scaled to the
//! next power of two, so `LANES` can exceed `N`. The lanes past `N` only ever
//! hold the `T::MAX` fill.

network! {
    /// Best-known network for 7 elements, depth 6.
    pub struct Best7 {
        name: "best_7",
        algorithm: Best,
        size: 7,
        lanes: 8,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7)],
            1 => [(0, 3), (1, 2), (4, 7), (5, 6)],
            2 => [(0, 1), (2, 3), (4, 5), (6, 7)],
            3 => [(0, 7), (1, 6), (2, 5), (3, 4)],
            4 => [(0, 2), (1, 3), (4, 6), (5, 7)],
            5 => [(0, 1), (2, 3), (4, 5), (6, 7)],
        ],
    }

    /// Best-known network for 10 elements, depth 7.
    pub struct Best10 {
        name: "best_10",
        algorithm: Best,
        size: 10,
        lanes: 10,
        stages: [
            0 => [(0, 1), (2, 5), (3, 6), (4, 7), (8, 9)],
            1 => [(0, 6), (1, 8), (2, 4), (3, 9), (5, 7)],
            2 => [(0, 2), (1, 3), (4, 5), (6, 8), (7, 9)],
            3 => [(0, 1), (2, 7), (3, 5), (4, 6), (8, 9)],
            4 => [(1, 2), (3, 4), (5, 6), (7, 8)],
            5 => [(1, 3), (2, 4), (5, 7), (6, 8)],
            6 => [(2, 3), (4, 5), (6, 7)],
        ],
    }

    /// Best-known network for 11 elements, depth 10.
    pub struct Best11 {
        name: "best_11",
        algorithm: Best,
        size: 11,
        lanes: 16,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
            1 => [(0, 3), (1, 2), (4, 7), (5, 6), (8, 11), (9, 10), (12, 15), (13, 14)],
            2 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
            3 => [(0, 7), (1, 6), (2, 5), (3, 4), (8, 15), (9, 14), (10, 13), (11, 12)],
            4 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15)],
            5 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
            6 => [(0, 15), (1, 14), (2, 13), (3, 12), (4, 11), (5, 10), (6, 9), (7, 8)],
            7 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15)],
            8 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15)],
            9 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
        ],
    }

    /// Best-known network for 21 elements, depth 15.
    pub struct Best21 {
        name: "best_21",
        algorithm: Best,
        size: 21,
        lanes: 32,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31)],
            1 => [(0, 3), (1, 2), (4, 7), (5, 6), (8, 11), (9, 10), (12, 15), (13, 14),
                (16, 19), (17, 18), (20, 23), (21, 22), (24, 27), (25, 26), (28, 31), (29, 30)],
            2 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31)],
            3 => [(0, 7), (1, 6), (2, 5), (3, 4), (8, 15), (9, 14), (10, 13), (11, 12),
                (16, 23), (17, 22), (18, 21), (19, 20), (24, 31), (25, 30), (26, 29), (27, 28)],
            4 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31)],
            5 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31)],
            6 => [(0, 15), (1, 14), (2, 13), (3, 12), (4, 11), (5, 10), (6, 9), (7, 8),
                (16, 31), (17, 30), (18, 29), (19, 28), (20, 27), (21, 26), (22, 25), (23, 24)],
            7 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 28), (25, 29), (26, 30), (27, 31)],
            8 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31)],
            9 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31)],
            10 => [(0, 31), (1, 30), (2, 29), (3, 28), (4, 27), (5, 26), (6, 25), (7, 24),
                (8, 23), (9, 22), (10, 21), (11, 20), (12, 19), (13, 18), (14, 17), (15, 16)],
            11 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15),
                (16, 24), (17, 25), (18, 26), (19, 27), (20, 28), (21, 29), (22, 30), (23, 31)],
            12 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 28), (25, 29), (26, 30), (27, 31)],
            13 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31)],
            14 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31)],
        ],
    }

    /// Best-known network for 30 elements, depth 15.
    pub struct Best30 {
        name: "best_30",
        algorithm: Best,
        size: 30,
        lanes: 32,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31)],
            1 => [(0, 3), (1, 2), (4, 7), (5, 6), (8, 11), (9, 10), (12, 15), (13, 14),
                (16, 19), (17, 18), (20, 23), (21, 22), (24, 27), (25, 26), (28, 31), (29, 30)],
            2 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31)],
            3 => [(0, 7), (1, 6), (2, 5), (3, 4), (8, 15), (9, 14), (10, 13), (11, 12),
                (16, 23), (17, 22), (18, 21), (19, 20), (24, 31), (25, 30), (26, 29), (27, 28)],
            4 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31)],
            5 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31)],
            6 => [(0, 15), (1, 14), (2, 13), (3, 12), (4, 11), (5, 10), (6, 9), (7, 8),
                (16, 31), (17, 30), (18, 29), (19, 28), (20, 27), (21, 26), (22, 25), (23, 24)],
            7 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 28), (25, 29), (26, 30), (27, 31)],
            8 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31)],
            9 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31)],
            10 => [(0, 31), (1, 30), (2, 29), (3, 28), (4, 27), (5, 26), (6, 25), (7, 24),
                (8, 23), (9, 22), (10, 21), (11, 20), (12, 19), (13, 18), (14, 17), (15, 16)],
            11 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15),
                (16, 24), (17, 25), (18, 26), (19, 27), (20, 28), (21, 29), (22, 30), (23, 31)],
            12 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 28), (25, 29), (26, 30), (27, 31)],
            13 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31)],
            14 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31)],
        ],
    }

    /// Best-known network for 61 elements, depth 21.
    pub struct Best61 {
        name: "best_61",
        algorithm: Best,
        size: 61,
        lanes: 64,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31),
                (32, 33), (34, 35), (36, 37), (38, 39), (40, 41), (42, 43), (44, 45), (46, 47),
                (48, 49), (50, 51), (52, 53), (54, 55), (56, 57), (58, 59), (60, 61), (62, 63)],
            1 => [(0, 3), (1, 2), (4, 7), (5, 6), (8, 11), (9, 10), (12, 15), (13, 14),
                (16, 19), (17, 18), (20, 23), (21, 22), (24, 27), (25, 26), (28, 31), (29, 30),
                (32, 35), (33, 34), (36, 39), (37, 38), (40, 43), (41, 42), (44, 47), (45, 46),
                (48, 51), (49, 50), (52, 55), (53, 54), (56, 59), (57, 58), (60, 63), (61, 62)],
            2 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31),
                (32, 33), (34, 35), (36, 37), (38, 39), (40, 41), (42, 43), (44, 45), (46, 47),
                (48, 49), (50, 51), (52, 53), (54, 55), (56, 57), (58, 59), (60, 61), (62, 63)],
            3 => [(0, 7), (1, 6), (2, 5), (3, 4), (8, 15), (9, 14), (10, 13), (11, 12),
                (16, 23), (17, 22), (18, 21), (19, 20), (24, 31), (25, 30), (26, 29), (27, 28),
                (32, 39), (33, 38), (34, 37), (35, 36), (40, 47), (41, 46), (42, 45), (43, 44),
                (48, 55), (49, 54), (50, 53), (51, 52), (56, 63), (57, 62), (58, 61), (59, 60)],
            4 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31),
                (32, 34), (33, 35), (36, 38), (37, 39), (40, 42), (41, 43), (44, 46), (45, 47),
                (48, 50), (49, 51), (52, 54), (53, 55), (56, 58), (57, 59), (60, 62), (61, 63)],
            5 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31),
                (32, 33), (34, 35), (36, 37), (38, 39), (40, 41), (42, 43), (44, 45), (46, 47),
                (48, 49), (50, 51), (52, 53), (54, 55), (56, 57), (58, 59), (60, 61), (62, 63)],
            6 => [(0, 15), (1, 14), (2, 13), (3, 12), (4, 11), (5, 10), (6, 9), (7, 8),
                (16, 31), (17, 30), (18, 29), (19, 28), (20, 27), (21, 26), (22, 25), (23, 24),
                (32, 47), (33, 46), (34, 45), (35, 44), (36, 43), (37, 42), (38, 41), (39, 40),
                (48, 63), (49, 62), (50, 61), (51, 60), (52, 59), (53, 58), (54, 57), (55, 56)],
            7 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 28), (25, 29), (26, 30), (27, 31),
                (32, 36), (33, 37), (34, 38), (35, 39), (40, 44), (41, 45), (42, 46), (43, 47),
                (48, 52), (49, 53), (50, 54), (51, 55), (56, 60), (57, 61), (58, 62), (59, 63)],
            8 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31),
                (32, 34), (33, 35), (36, 38), (37, 39), (40, 42), (41, 43), (44, 46), (45, 47),
                (48, 50), (49, 51), (52, 54), (53, 55), (56, 58), (57, 59), (60, 62), (61, 63)],
            9 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31),
                (32, 33), (34, 35), (36, 37), (38, 39), (40, 41), (42, 43), (44, 45), (46, 47),
                (48, 49), (50, 51), (52, 53), (54, 55), (56, 57), (58, 59), (60, 61), (62, 63)],
            10 => [(0, 31), (1, 30), (2, 29), (3, 28), (4, 27), (5, 26), (6, 25), (7, 24),
                (8, 23), (9, 22), (10, 21), (11, 20), (12, 19), (13, 18), (14, 17), (15, 16),
                (32, 63), (33, 62), (34, 61), (35, 60), (36, 59), (37, 58), (38, 57), (39, 56),
                (40, 55), (41, 54), (42, 53), (43, 52), (44, 51), (45, 50), (46, 49), (47, 48)],
            11 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15),
                (16, 24), (17, 25), (18, 26), (19, 27), (20, 28), (21, 29), (22, 30), (23, 31),
                (32, 40), (33, 41), (34, 42), (35, 43), (36, 44), (37, 45), (38, 46), (39, 47),
                (48, 56), (49, 57), (50, 58), (51, 59), (52, 60), (53, 61), (54, 62), (55, 63)],
            12 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 28), (25, 29), (26, 30), (27, 31),
                (32, 36), (33, 37), (34, 38), (35, 39), (40, 44), (41, 45), (42, 46), (43, 47),
                (48, 52), (49, 53), (50, 54), (51, 55), (56, 60), (57, 61), (58, 62), (59, 63)],
            13 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31),
                (32, 34), (33, 35), (36, 38), (37, 39), (40, 42), (41, 43), (44, 46), (45, 47),
                (48, 50), (49, 51), (52, 54), (53, 55), (56, 58), (57, 59), (60, 62), (61, 63)],
            14 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31),
                (32, 33), (34, 35), (36, 37), (38, 39), (40, 41), (42, 43), (44, 45), (46, 47),
                (48, 49), (50, 51), (52, 53), (54, 55), (56, 57), (58, 59), (60, 61), (62, 63)],
            15 => [(0, 63), (1, 62), (2, 61), (3, 60), (4, 59), (5, 58), (6, 57), (7, 56),
                (8, 55), (9, 54), (10, 53), (11, 52), (12, 51), (13, 50), (14, 49), (15, 48),
                (16, 47), (17, 46), (18, 45), (19, 44), (20, 43), (21, 42), (22, 41), (23, 40),
                (24, 39), (25, 38), (26, 37), (27, 36), (28, 35), (29, 34), (30, 33), (31, 32)],
            16 => [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23),
                (8, 24), (9, 25), (10, 26), (11, 27), (12, 28), (13, 29), (14, 30), (15, 31),
                (32, 48), (33, 49), (34, 50), (35, 51), (36, 52), (37, 53), (38, 54), (39, 55),
                (40, 56), (41, 57), (42, 58), (43, 59), (44, 60), (45, 61), (46, 62), (47, 63)],
            17 => [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15),
                (16, 24), (17, 25), (18, 26), (19, 27), (20, 28), (21, 29), (22, 30), (23, 31),
                (32, 40), (33, 41), (34, 42), (35, 43), (36, 44), (37, 45), (38, 46), (39, 47),
                (48, 56), (49, 57), (50, 58), (51, 59), (52, 60), (53, 61), (54, 62), (55, 63)],
            18 => [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15),
                (16, 20), (17, 21), (18, 22), (19, 23), (24, 28), (25, 29), (26, 30), (27, 31),
                (32, 36), (33, 37), (34, 38), (35, 39), (40, 44), (41, 45), (42, 46), (43, 47),
                (48, 52), (49, 53), (50, 54), (51, 55), (56, 60), (57, 61), (58, 62), (59, 63)],
            19 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31),
                (32, 34), (33, 35), (36, 38), (37, 39), (40, 42), (41, 43), (44, 46), (45, 47),
                (48, 50), (49, 51), (52, 54), (53, 55), (56, 58), (57, 59), (60, 62), (61, 63)],
            20 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31),
                (32, 33), (34, 35), (36, 37), (38, 39), (40, 41), (42, 43), (44, 45), (46, 47),
                (48, 49), (50, 51), (52, 53), (54, 55), (56, 57), (58, 59), (60, 61), (62, 63)],
        ],
    }
}
