//! Odd-even merge networks.

network! {
    /// Odd-even merge network for 6 elements, depth 6.
    pub struct Oddeven6 {
        name: "oddeven_6",
        algorithm: OddEven,
        size: 6,
        lanes: 6,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5)],
            1 => [(0, 2), (1, 3)],
            2 => [(0, 4), (1, 2)],
            3 => [(1, 5), (2, 4)],
            4 => [(1, 2), (3, 5)],
            5 => [(3, 4)],
        ],
    }

    /// Odd-even merge network for 9 elements, depth 9.
    pub struct Oddeven9 {
        name: "oddeven_9",
        algorithm: OddEven,
        size: 9,
        lanes: 9,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7)],
            1 => [(0, 2), (1, 3), (4, 6), (5, 7)],
            2 => [(0, 4), (1, 2), (3, 7), (5, 6)],
            3 => [(0, 8), (1, 5), (2, 6)],
            4 => [(2, 4), (3, 5)],
            5 => [(1, 2), (3, 4), (5, 6)],
            6 => [(3, 5), (4, 8)],
            7 => [(2, 4), (6, 8)],
            8 => [(1, 2), (3, 4), (5, 6), (7, 8)],
        ],
    }

    /// Odd-even merge network for 14 elements, depth 10.
    pub struct Oddeven14 {
        name: "oddeven_14",
        algorithm: OddEven,
        size: 14,
        lanes: 14,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13)],
            1 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11)],
            2 => [(0, 4), (1, 2), (3, 7), (5, 6), (8, 12), (9, 10)],
            3 => [(0, 8), (1, 5), (2, 6), (9, 13), (10, 12)],
            4 => [(2, 4), (3, 5), (9, 10), (11, 13)],
            5 => [(1, 2), (3, 4), (5, 6), (11, 12)],
            6 => [(1, 9), (2, 10), (3, 11), (4, 12), (5, 13)],
            7 => [(4, 8), (5, 9), (6, 10), (7, 11)],
            8 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13)],
            9 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12)],
        ],
    }

    /// Odd-even merge network for 15 elements, depth 10.
    pub struct Oddeven15 {
        name: "oddeven_15",
        algorithm: OddEven,
        size: 15,
        lanes: 15,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13)],
            1 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14)],
            2 => [(0, 4), (1, 2), (3, 7), (5, 6), (8, 12), (9, 10), (13, 14)],
            3 => [(0, 8), (1, 5), (2, 6), (9, 13), (10, 14)],
            4 => [(2, 4), (3, 5), (10, 12), (11, 13)],
            5 => [(1, 2), (3, 4), (5, 6), (9, 10), (11, 12), (13, 14)],
            6 => [(1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14)],
            7 => [(4, 8), (5, 9), (6, 10), (7, 11)],
            8 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13)],
            9 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14)],
        ],
    }

    /// Odd-even merge network for 16 elements, depth 10.
    pub struct Oddeven16 {
        name: "oddeven_16",
        algorithm: OddEven,
        size: 16,
        lanes: 16,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
            1 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15)],
            2 => [(0, 4), (1, 2), (3, 7), (5, 6), (8, 12), (9, 10), (11, 15), (13, 14)],
            3 => [(0, 8), (1, 5), (2, 6), (7, 15), (9, 13), (10, 14)],
            4 => [(2, 4), (3, 5), (10, 12), (11, 13)],
            5 => [(1, 2), (3, 4), (5, 6), (9, 10), (11, 12), (13, 14)],
            6 => [(1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14)],
            7 => [(4, 8), (5, 9), (6, 10), (7, 11)],
            8 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13)],
            9 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14)],
        ],
    }

    /// Odd-even merge network for 17 elements, depth 14.
    pub struct Oddeven17 {
        name: "oddeven_17",
        algorithm: OddEven,
        size: 17,
        lanes: 17,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
            1 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15)],
            2 => [(0, 4), (1, 2), (3, 7), (5, 6), (8, 12), (9, 10), (11, 15), (13, 14)],
            3 => [(0, 8), (1, 5), (2, 6), (7, 15), (9, 13), (10, 14)],
            4 => [(0, 16), (2, 4), (3, 5), (10, 12), (11, 13)],
            5 => [(1, 2), (3, 4), (5, 6), (9, 10), (11, 12), (13, 14)],
            6 => [(1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14)],
            7 => [(4, 8), (5, 9), (6, 10), (7, 11)],
            8 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13)],
            9 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14)],
            10 => [(5, 9), (6, 10), (7, 11), (8, 16)],
            11 => [(3, 5), (4, 8), (7, 9), (11, 13), (12, 16)],
            12 => [(2, 4), (6, 8), (10, 12), (14, 16)],
            13 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16)],
        ],
    }

    /// Odd-even merge network for 20 elements, depth 15.
    pub struct Oddeven20 {
        name: "oddeven_20",
        algorithm: OddEven,
        size: 20,
        lanes: 20,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19)],
            1 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19)],
            2 => [(0, 4), (1, 2), (3, 7), (5, 6), (8, 12), (9, 10), (11, 15), (13, 14), (17, 18)],
            3 => [(0, 8), (1, 5), (2, 6), (7, 15), (9, 13), (10, 14), (17, 18)],
            4 => [(0, 16), (2, 4), (3, 5), (10, 12), (11, 13), (17, 18)],
            5 => [(1, 2), (3, 4), (5, 6), (9, 10), (11, 12), (13, 14)],
            6 => [(1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14)],
            7 => [(4, 8), (5, 9), (6, 10), (7, 11)],
            8 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13)],
            9 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14)],
            10 => [(1, 17), (2, 18), (3, 19), (8, 16)],
            11 => [(4, 8), (9, 17), (10, 18), (11, 19), (12, 16)],
            12 => [(2, 4), (5, 9), (6, 10), (7, 11), (13, 17), (14, 18), (15, 19)],
            13 => [(1, 2), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17)],
            14 => [(3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18)],
        ],
    }

    /// Odd-even merge network for 29 elements, depth 15.
    pub struct Oddeven29 {
        name: "oddeven_29",
        algorithm: OddEven,
        size: 29,
        lanes: 29,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27)],
            1 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27)],
            2 => [(0, 4), (1, 2), (3, 7), (5, 6), (8, 12), (9, 10), (11, 15), (13, 14),
                (16, 20), (17, 18), (19, 23), (21, 22), (24, 28), (25, 26)],
            3 => [(0, 8), (1, 5), (2, 6), (7, 15), (9, 13), (10, 14), (16, 24), (17, 21),
                (18, 22), (26, 28)],
            4 => [(0, 16), (2, 4), (3, 5), (10, 12), (11, 13), (18, 20), (19, 21), (25, 26),
                (27, 28)],
            5 => [(1, 2), (3, 4), (5, 6), (9, 10), (11, 12), (13, 14), (17, 18), (19, 20),
                (21, 22)],
            6 => [(1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (17, 25), (18, 26),
                (19, 27), (20, 28)],
            7 => [(4, 8), (5, 9), (6, 10), (7, 11), (20, 24), (21, 25), (22, 26), (23, 27)],
            8 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (18, 20), (19, 21),
                (22, 24), (23, 25), (26, 28)],
            9 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (17, 18),
                (19, 20), (21, 22), (23, 24), (25, 26), (27, 28)],
            10 => [(1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23), (8, 24),
                (9, 25), (10, 26), (11, 27), (12, 28)],
            11 => [(8, 16), (9, 17), (10, 18), (11, 19), (12, 20), (13, 21), (14, 22), (15, 23)],
            12 => [(4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18), (15, 19),
                (20, 24), (21, 25), (22, 26), (23, 27)],
            13 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17),
                (18, 20), (19, 21), (22, 24), (23, 25), (26, 28)],
            14 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24), (25, 26), (27, 28)],
        ],
    }

    /// Odd-even merge network for 61 elements, depth 21.
    pub struct Oddeven61 {
        name: "oddeven_61",
        algorithm: OddEven,
        size: 61,
        lanes: 61,
        stages: [
            0 => [(0, 1), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15),
                (16, 17), (18, 19), (20, 21), (22, 23), (24, 25), (26, 27), (28, 29), (30, 31),
                (32, 33), (34, 35), (36, 37), (38, 39), (40, 41), (42, 43), (44, 45), (46, 47),
                (48, 49), (50, 51), (52, 53), (54, 55), (56, 57), (58, 59)],
            1 => [(0, 2), (1, 3), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15),
                (16, 18), (17, 19), (20, 22), (21, 23), (24, 26), (25, 27), (28, 30), (29, 31),
                (32, 34), (33, 35), (36, 38), (37, 39), (40, 42), (41, 43), (44, 46), (45, 47),
                (48, 50), (49, 51), (52, 54), (53, 55), (56, 58), (57, 59)],
            2 => [(0, 4), (1, 2), (3, 7), (5, 6), (8, 12), (9, 10), (11, 15), (13, 14),
                (16, 20), (17, 18), (19, 23), (21, 22), (24, 28), (25, 26), (27, 31), (29, 30),
                (32, 36), (33, 34), (35, 39), (37, 38), (40, 44), (41, 42), (43, 47), (45, 46),
                (48, 52), (49, 50), (51, 55), (53, 54), (56, 60), (57, 58)],
            3 => [(0, 8), (1, 5), (2, 6), (7, 15), (9, 13), (10, 14), (16, 24), (17, 21),
                (18, 22), (23, 31), (25, 29), (26, 30), (32, 40), (33, 37), (34, 38), (39, 47),
                (41, 45), (42, 46), (48, 56), (49, 53), (50, 54), (58, 60)],
            4 => [(0, 16), (2, 4), (3, 5), (10, 12), (11, 13), (15, 31), (18, 20), (19, 21),
                (26, 28), (27, 29), (32, 48), (34, 36), (35, 37), (42, 44), (43, 45), (50, 52),
                (51, 53), (57, 58), (59, 60)],
            5 => [(0, 32), (1, 2), (3, 4), (5, 6), (9, 10), (11, 12), (13, 14), (17, 18),
                (19, 20), (21, 22), (25, 26), (27, 28), (29, 30), (33, 34), (35, 36), (37, 38),
                (41, 42), (43, 44), (45, 46), (49, 50), (51, 52), (53, 54)],
            6 => [(1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (17, 25), (18, 26),
                (19, 27), (20, 28), (21, 29), (22, 30), (33, 41), (34, 42), (35, 43), (36, 44),
                (37, 45), (38, 46), (49, 57), (50, 58), (51, 59), (52, 60)],
            7 => [(4, 8), (5, 9), (6, 10), (7, 11), (20, 24), (21, 25), (22, 26), (23, 27),
                (36, 40), (37, 41), (38, 42), (39, 43), (52, 56), (53, 57), (54, 58), (55, 59)],
            8 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (18, 20), (19, 21),
                (22, 24), (23, 25), (26, 28), (27, 29), (34, 36), (35, 37), (38, 40), (39, 41),
                (42, 44), (43, 45), (50, 52), (51, 53), (54, 56), (55, 57), (58, 60)],
            9 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (17, 18),
                (19, 20), (21, 22), (23, 24), (25, 26), (27, 28), (29, 30), (33, 34), (35, 36),
                (37, 38), (39, 40), (41, 42), (43, 44), (45, 46), (49, 50), (51, 52), (53, 54),
                (55, 56), (57, 58), (59, 60)],
            10 => [(1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23), (8, 24),
                (9, 25), (10, 26), (11, 27), (12, 28), (13, 29), (14, 30), (33, 49), (34, 50),
                (35, 51), (36, 52), (37, 53), (38, 54), (39, 55), (40, 56), (41, 57), (42, 58),
                (43, 59), (44, 60)],
            11 => [(8, 16), (9, 17), (10, 18), (11, 19), (12, 20), (13, 21), (14, 22), (15, 23),
                (40, 48), (41, 49), (42, 50), (43, 51), (44, 52), (45, 53), (46, 54), (47, 55)],
            12 => [(4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18), (15, 19),
                (20, 24), (21, 25), (22, 26), (23, 27), (36, 40), (37, 41), (38, 42), (39, 43),
                (44, 48), (45, 49), (46, 50), (47, 51), (52, 56), (53, 57), (54, 58), (55, 59)],
            13 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17),
                (18, 20), (19, 21), (22, 24), (23, 25), (26, 28), (27, 29), (34, 36), (35, 37),
                (38, 40), (39, 41), (42, 44), (43, 45), (46, 48), (47, 49), (50, 52), (51, 53),
                (54, 56), (55, 57), (58, 60)],
            14 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24), (25, 26), (27, 28), (29, 30), (33, 34),
                (35, 36), (37, 38), (39, 40), (41, 42), (43, 44), (45, 46), (47, 48), (49, 50),
                (51, 52), (53, 54), (55, 56), (57, 58), (59, 60)],
            15 => [(1, 33), (2, 34), (3, 35), (4, 36), (5, 37), (6, 38), (7, 39), (8, 40),
                (9, 41), (10, 42), (11, 43), (12, 44), (13, 45), (14, 46), (15, 47), (16, 48),
                (17, 49), (18, 50), (19, 51), (20, 52), (21, 53), (22, 54), (23, 55), (24, 56),
                (25, 57), (26, 58), (27, 59), (28, 60)],
            16 => [(16, 32), (17, 33), (18, 34), (19, 35), (20, 36), (21, 37), (22, 38),
                (23, 39), (24, 40), (25, 41), (26, 42), (27, 43), (28, 44), (29, 45), (30, 46),
                (31, 47)],
            17 => [(8, 16), (9, 17), (10, 18), (11, 19), (12, 20), (13, 21), (14, 22), (15, 23),
                (24, 32), (25, 33), (26, 34), (27, 35), (28, 36), (29, 37), (30, 38), (31, 39),
                (40, 48), (41, 49), (42, 50), (43, 51), (44, 52), (45, 53), (46, 54), (47, 55)],
            18 => [(4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18), (15, 19),
                (20, 24), (21, 25), (22, 26), (23, 27), (28, 32), (29, 33), (30, 34), (31, 35),
                (36, 40), (37, 41), (38, 42), (39, 43), (44, 48), (45, 49), (46, 50), (47, 51),
                (52, 56), (53, 57), (54, 58), (55, 59)],
            19 => [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17),
                (18, 20), (19, 21), (22, 24), (23, 25), (26, 28), (27, 29), (30, 32), (31, 33),
                (34, 36), (35, 37), (38, 40), (39, 41), (42, 44), (43, 45), (46, 48), (47, 49),
                (50, 52), (51, 53), (54, 56), (55, 57), (58, 60)],
            20 => [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16),
                (17, 18), (19, 20), (21, 22), (23, 24), (25, 26), (27, 28), (29, 30), (31, 32),
                (33, 34), (35, 36), (37, 38), (39, 40), (41, 42), (43, 44), (45, 46), (47, 48),
                (49, 50), (51, 52), (53, 54), (55, 56), (57, 58), (59, 60)],
        ],
    }
}
