//! Immediate operands from compile-time plans.
//!
//! Shuffle and blend intrinsics take their control as a const generic, and
//! stable Rust cannot feed an associated constant of a generic parameter
//! into one. The helpers below take the immediate as a plain argument and
//! match it onto every possible const instantiation; each helper is inlined
//! where the argument is a constant, so only one arm survives. Each match
//! covers exactly the bits the intrinsic accepts.

#![allow(dead_code, unused_macros)]

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

macro_rules! constify_imm8 {
    ($imm:expr, $i:ident => $body:expr) => {
        match ($imm) & 0xff {
            0 => { const $i: i32 = 0; $body }
            1 => { const $i: i32 = 1; $body }
            2 => { const $i: i32 = 2; $body }
            3 => { const $i: i32 = 3; $body }
            4 => { const $i: i32 = 4; $body }
            5 => { const $i: i32 = 5; $body }
            6 => { const $i: i32 = 6; $body }
            7 => { const $i: i32 = 7; $body }
            8 => { const $i: i32 = 8; $body }
            9 => { const $i: i32 = 9; $body }
            10 => { const $i: i32 = 10; $body }
            11 => { const $i: i32 = 11; $body }
            12 => { const $i: i32 = 12; $body }
            13 => { const $i: i32 = 13; $body }
            14 => { const $i: i32 = 14; $body }
            15 => { const $i: i32 = 15; $body }
            16 => { const $i: i32 = 16; $body }
            17 => { const $i: i32 = 17; $body }
            18 => { const $i: i32 = 18; $body }
            19 => { const $i: i32 = 19; $body }
            20 => { const $i: i32 = 20; $body }
            21 => { const $i: i32 = 21; $body }
            22 => { const $i: i32 = 22; $body }
            23 => { const $i: i32 = 23; $body }
            24 => { const $i: i32 = 24; $body }
            25 => { const $i: i32 = 25; $body }
            26 => { const $i: i32 = 26; $body }
            27 => { const $i: i32 = 27; $body }
            28 => { const $i: i32 = 28; $body }
            29 => { const $i: i32 = 29; $body }
            30 => { const $i: i32 = 30; $body }
            31 => { const $i: i32 = 31; $body }
            32 => { const $i: i32 = 32; $body }
            33 => { const $i: i32 = 33; $body }
            34 => { const $i: i32 = 34; $body }
            35 => { const $i: i32 = 35; $body }
            36 => { const $i: i32 = 36; $body }
            37 => { const $i: i32 = 37; $body }
            38 => { const $i: i32 = 38; $body }
            39 => { const $i: i32 = 39; $body }
            40 => { const $i: i32 = 40; $body }
            41 => { const $i: i32 = 41; $body }
            42 => { const $i: i32 = 42; $body }
            43 => { const $i: i32 = 43; $body }
            44 => { const $i: i32 = 44; $body }
            45 => { const $i: i32 = 45; $body }
            46 => { const $i: i32 = 46; $body }
            47 => { const $i: i32 = 47; $body }
            48 => { const $i: i32 = 48; $body }
            49 => { const $i: i32 = 49; $body }
            50 => { const $i: i32 = 50; $body }
            51 => { const $i: i32 = 51; $body }
            52 => { const $i: i32 = 52; $body }
            53 => { const $i: i32 = 53; $body }
            54 => { const $i: i32 = 54; $body }
            55 => { const $i: i32 = 55; $body }
            56 => { const $i: i32 = 56; $body }
            57 => { const $i: i32 = 57; $body }
            58 => { const $i: i32 = 58; $body }
            59 => { const $i: i32 = 59; $body }
            60 => { const $i: i32 = 60; $body }
            61 => { const $i: i32 = 61; $body }
            62 => { const $i: i32 = 62; $body }
            63 => { const $i: i32 = 63; $body }
            64 => { const $i: i32 = 64; $body }
            65 => { const $i: i32 = 65; $body }
            66 => { const $i: i32 = 66; $body }
            67 => { const $i: i32 = 67; $body }
            68 => { const $i: i32 = 68; $body }
            69 => { const $i: i32 = 69; $body }
            70 => { const $i: i32 = 70; $body }
            71 => { const $i: i32 = 71; $body }
            72 => { const $i: i32 = 72; $body }
            73 => { const $i: i32 = 73; $body }
            74 => { const $i: i32 = 74; $body }
            75 => { const $i: i32 = 75; $body }
            76 => { const $i: i32 = 76; $body }
            77 => { const $i: i32 = 77; $body }
            78 => { const $i: i32 = 78; $body }
            79 => { const $i: i32 = 79; $body }
            80 => { const $i: i32 = 80; $body }
            81 => { const $i: i32 = 81; $body }
            82 => { const $i: i32 = 82; $body }
            83 => { const $i: i32 = 83; $body }
            84 => { const $i: i32 = 84; $body }
            85 => { const $i: i32 = 85; $body }
            86 => { const $i: i32 = 86; $body }
            87 => { const $i: i32 = 87; $body }
            88 => { const $i: i32 = 88; $body }
            89 => { const $i: i32 = 89; $body }
            90 => { const $i: i32 = 90; $body }
            91 => { const $i: i32 = 91; $body }
            92 => { const $i: i32 = 92; $body }
            93 => { const $i: i32 = 93; $body }
            94 => { const $i: i32 = 94; $body }
            95 => { const $i: i32 = 95; $body }
            96 => { const $i: i32 = 96; $body }
            97 => { const $i: i32 = 97; $body }
            98 => { const $i: i32 = 98; $body }
            99 => { const $i: i32 = 99; $body }
            100 => { const $i: i32 = 100; $body }
            101 => { const $i: i32 = 101; $body }
            102 => { const $i: i32 = 102; $body }
            103 => { const $i: i32 = 103; $body }
            104 => { const $i: i32 = 104; $body }
            105 => { const $i: i32 = 105; $body }
            106 => { const $i: i32 = 106; $body }
            107 => { const $i: i32 = 107; $body }
            108 => { const $i: i32 = 108; $body }
            109 => { const $i: i32 = 109; $body }
            110 => { const $i: i32 = 110; $body }
            111 => { const $i: i32 = 111; $body }
            112 => { const $i: i32 = 112; $body }
            113 => { const $i: i32 = 113; $body }
            114 => { const $i: i32 = 114; $body }
            115 => { const $i: i32 = 115; $body }
            116 => { const $i: i32 = 116; $body }
            117 => { const $i: i32 = 117; $body }
            118 => { const $i: i32 = 118; $body }
            119 => { const $i: i32 = 119; $body }
            120 => { const $i: i32 = 120; $body }
            121 => { const $i: i32 = 121; $body }
            122 => { const $i: i32 = 122; $body }
            123 => { const $i: i32 = 123; $body }
            124 => { const $i: i32 = 124; $body }
            125 => { const $i: i32 = 125; $body }
            126 => { const $i: i32 = 126; $body }
            127 => { const $i: i32 = 127; $body }
            128 => { const $i: i32 = 128; $body }
            129 => { const $i: i32 = 129; $body }
            130 => { const $i: i32 = 130; $body }
            131 => { const $i: i32 = 131; $body }
            132 => { const $i: i32 = 132; $body }
            133 => { const $i: i32 = 133; $body }
            134 => { const $i: i32 = 134; $body }
            135 => { const $i: i32 = 135; $body }
            136 => { const $i: i32 = 136; $body }
            137 => { const $i: i32 = 137; $body }
            138 => { const $i: i32 = 138; $body }
            139 => { const $i: i32 = 139; $body }
            140 => { const $i: i32 = 140; $body }
            141 => { const $i: i32 = 141; $body }
            142 => { const $i: i32 = 142; $body }
            143 => { const $i: i32 = 143; $body }
            144 => { const $i: i32 = 144; $body }
            145 => { const $i: i32 = 145; $body }
            146 => { const $i: i32 = 146; $body }
            147 => { const $i: i32 = 147; $body }
            148 => { const $i: i32 = 148; $body }
            149 => { const $i: i32 = 149; $body }
            150 => { const $i: i32 = 150; $body }
            151 => { const $i: i32 = 151; $body }
            152 => { const $i: i32 = 152; $body }
            153 => { const $i: i32 = 153; $body }
            154 => { const $i: i32 = 154; $body }
            155 => { const $i: i32 = 155; $body }
            156 => { const $i: i32 = 156; $body }
            157 => { const $i: i32 = 157; $body }
            158 => { const $i: i32 = 158; $body }
            159 => { const $i: i32 = 159; $body }
            160 => { const $i: i32 = 160; $body }
            161 => { const $i: i32 = 161; $body }
            162 => { const $i: i32 = 162; $body }
            163 => { const $i: i32 = 163; $body }
            164 => { const $i: i32 = 164; $body }
            165 => { const $i: i32 = 165; $body }
            166 => { const $i: i32 = 166; $body }
            167 => { const $i: i32 = 167; $body }
            168 => { const $i: i32 = 168; $body }
            169 => { const $i: i32 = 169; $body }
            170 => { const $i: i32 = 170; $body }
            171 => { const $i: i32 = 171; $body }
            172 => { const $i: i32 = 172; $body }
            173 => { const $i: i32 = 173; $body }
            174 => { const $i: i32 = 174; $body }
            175 => { const $i: i32 = 175; $body }
            176 => { const $i: i32 = 176; $body }
            177 => { const $i: i32 = 177; $body }
            178 => { const $i: i32 = 178; $body }
            179 => { const $i: i32 = 179; $body }
            180 => { const $i: i32 = 180; $body }
            181 => { const $i: i32 = 181; $body }
            182 => { const $i: i32 = 182; $body }
            183 => { const $i: i32 = 183; $body }
            184 => { const $i: i32 = 184; $body }
            185 => { const $i: i32 = 185; $body }
            186 => { const $i: i32 = 186; $body }
            187 => { const $i: i32 = 187; $body }
            188 => { const $i: i32 = 188; $body }
            189 => { const $i: i32 = 189; $body }
            190 => { const $i: i32 = 190; $body }
            191 => { const $i: i32 = 191; $body }
            192 => { const $i: i32 = 192; $body }
            193 => { const $i: i32 = 193; $body }
            194 => { const $i: i32 = 194; $body }
            195 => { const $i: i32 = 195; $body }
            196 => { const $i: i32 = 196; $body }
            197 => { const $i: i32 = 197; $body }
            198 => { const $i: i32 = 198; $body }
            199 => { const $i: i32 = 199; $body }
            200 => { const $i: i32 = 200; $body }
            201 => { const $i: i32 = 201; $body }
            202 => { const $i: i32 = 202; $body }
            203 => { const $i: i32 = 203; $body }
            204 => { const $i: i32 = 204; $body }
            205 => { const $i: i32 = 205; $body }
            206 => { const $i: i32 = 206; $body }
            207 => { const $i: i32 = 207; $body }
            208 => { const $i: i32 = 208; $body }
            209 => { const $i: i32 = 209; $body }
            210 => { const $i: i32 = 210; $body }
            211 => { const $i: i32 = 211; $body }
            212 => { const $i: i32 = 212; $body }
            213 => { const $i: i32 = 213; $body }
            214 => { const $i: i32 = 214; $body }
            215 => { const $i: i32 = 215; $body }
            216 => { const $i: i32 = 216; $body }
            217 => { const $i: i32 = 217; $body }
            218 => { const $i: i32 = 218; $body }
            219 => { const $i: i32 = 219; $body }
            220 => { const $i: i32 = 220; $body }
            221 => { const $i: i32 = 221; $body }
            222 => { const $i: i32 = 222; $body }
            223 => { const $i: i32 = 223; $body }
            224 => { const $i: i32 = 224; $body }
            225 => { const $i: i32 = 225; $body }
            226 => { const $i: i32 = 226; $body }
            227 => { const $i: i32 = 227; $body }
            228 => { const $i: i32 = 228; $body }
            229 => { const $i: i32 = 229; $body }
            230 => { const $i: i32 = 230; $body }
            231 => { const $i: i32 = 231; $body }
            232 => { const $i: i32 = 232; $body }
            233 => { const $i: i32 = 233; $body }
            234 => { const $i: i32 = 234; $body }
            235 => { const $i: i32 = 235; $body }
            236 => { const $i: i32 = 236; $body }
            237 => { const $i: i32 = 237; $body }
            238 => { const $i: i32 = 238; $body }
            239 => { const $i: i32 = 239; $body }
            240 => { const $i: i32 = 240; $body }
            241 => { const $i: i32 = 241; $body }
            242 => { const $i: i32 = 242; $body }
            243 => { const $i: i32 = 243; $body }
            244 => { const $i: i32 = 244; $body }
            245 => { const $i: i32 = 245; $body }
            246 => { const $i: i32 = 246; $body }
            247 => { const $i: i32 = 247; $body }
            248 => { const $i: i32 = 248; $body }
            249 => { const $i: i32 = 249; $body }
            250 => { const $i: i32 = 250; $body }
            251 => { const $i: i32 = 251; $body }
            252 => { const $i: i32 = 252; $body }
            253 => { const $i: i32 = 253; $body }
            254 => { const $i: i32 = 254; $body }
            _ => { const $i: i32 = 255; $body }
        }
    };
}

macro_rules! constify_imm4 {
    ($imm:expr, $i:ident => $body:expr) => {
        match ($imm) & 0xf {
            0 => { const $i: i32 = 0; $body }
            1 => { const $i: i32 = 1; $body }
            2 => { const $i: i32 = 2; $body }
            3 => { const $i: i32 = 3; $body }
            4 => { const $i: i32 = 4; $body }
            5 => { const $i: i32 = 5; $body }
            6 => { const $i: i32 = 6; $body }
            7 => { const $i: i32 = 7; $body }
            8 => { const $i: i32 = 8; $body }
            9 => { const $i: i32 = 9; $body }
            10 => { const $i: i32 = 10; $body }
            11 => { const $i: i32 = 11; $body }
            12 => { const $i: i32 = 12; $body }
            13 => { const $i: i32 = 13; $body }
            14 => { const $i: i32 = 14; $body }
            _ => { const $i: i32 = 15; $body }
        }
    };
}

macro_rules! constify_imm3 {
    ($imm:expr, $i:ident => $body:expr) => {
        match ($imm) & 0x7 {
            0 => { const $i: i32 = 0; $body }
            1 => { const $i: i32 = 1; $body }
            2 => { const $i: i32 = 2; $body }
            3 => { const $i: i32 = 3; $body }
            4 => { const $i: i32 = 4; $body }
            5 => { const $i: i32 = 5; $body }
            6 => { const $i: i32 = 6; $body }
            _ => { const $i: i32 = 7; $body }
        }
    };
}

macro_rules! constify_imm2 {
    ($imm:expr, $i:ident => $body:expr) => {
        match ($imm) & 0x3 {
            0 => { const $i: i32 = 0; $body }
            1 => { const $i: i32 = 1; $body }
            2 => { const $i: i32 = 2; $body }
            _ => { const $i: i32 = 3; $body }
        }
    };
}

#[cfg(sse)]
pub(crate) mod m128 {
    use super::*;

    #[inline(always)]
    pub(crate) unsafe fn shuffle_epi32(a: __m128i, imm: i32) -> __m128i {
        constify_imm8!(imm, I => _mm_shuffle_epi32::<I>(a))
    }

    #[inline(always)]
    pub(crate) unsafe fn shufflelo_epi16(a: __m128i, imm: i32) -> __m128i {
        constify_imm8!(imm, I => _mm_shufflelo_epi16::<I>(a))
    }

    #[inline(always)]
    pub(crate) unsafe fn shufflehi_epi16(a: __m128i, imm: i32) -> __m128i {
        constify_imm8!(imm, I => _mm_shufflehi_epi16::<I>(a))
    }

    #[inline(always)]
    pub(crate) unsafe fn blend_epi16(a: __m128i, b: __m128i, imm: i32) -> __m128i {
        constify_imm8!(imm, I => _mm_blend_epi16::<I>(a, b))
    }

    #[inline(always)]
    pub(crate) unsafe fn blend_epi32(a: __m128i, b: __m128i, imm: i32) -> __m128i {
        constify_imm4!(imm, I => _mm_blend_epi32::<I>(a, b))
    }

    #[inline(always)]
    pub(crate) unsafe fn insert_epi32(a: __m128i, word: i32, index: usize) -> __m128i {
        constify_imm2!(index as i32, I => _mm_insert_epi32::<I>(a, word))
    }

    #[inline(always)]
    pub(crate) unsafe fn extract_epi32(a: __m128i, index: usize) -> i32 {
        constify_imm2!(index as i32, I => _mm_extract_epi32::<I>(a))
    }
}

#[cfg(avx2)]
pub(crate) mod m256 {
    use super::*;

    #[inline(always)]
    pub(crate) unsafe fn shuffle_epi32(a: __m256i, imm: i32) -> __m256i {
        constify_imm8!(imm, I => _mm256_shuffle_epi32::<I>(a))
    }

    #[inline(always)]
    pub(crate) unsafe fn shufflelo_epi16(a: __m256i, imm: i32) -> __m256i {
        constify_imm8!(imm, I => _mm256_shufflelo_epi16::<I>(a))
    }

    #[inline(always)]
    pub(crate) unsafe fn shufflehi_epi16(a: __m256i, imm: i32) -> __m256i {
        constify_imm8!(imm, I => _mm256_shufflehi_epi16::<I>(a))
    }

    #[inline(always)]
    pub(crate) unsafe fn blend_epi16(a: __m256i, b: __m256i, imm: i32) -> __m256i {
        constify_imm8!(imm, I => _mm256_blend_epi16::<I>(a, b))
    }

    #[inline(always)]
    pub(crate) unsafe fn blend_epi32(a: __m256i, b: __m256i, imm: i32) -> __m256i {
        constify_imm8!(imm, I => _mm256_blend_epi32::<I>(a, b))
    }

    #[inline(always)]
    pub(crate) unsafe fn permute4x64_epi64(a: __m256i, imm: i32) -> __m256i {
        constify_imm8!(imm, I => _mm256_permute4x64_epi64::<I>(a))
    }

    #[inline(always)]
    pub(crate) unsafe fn insert_epi32(a: __m256i, word: i32, index: usize) -> __m256i {
        constify_imm3!(index as i32, I => _mm256_insert_epi32::<I>(a, word))
    }

    #[inline(always)]
    pub(crate) unsafe fn extract_epi32(a: __m256i, index: usize) -> i32 {
        constify_imm3!(index as i32, I => _mm256_extract_epi32::<I>(a))
    }
}

#[cfg(avx512)]
pub(crate) mod m512 {
    use super::*;

    #[inline(always)]
    pub(crate) unsafe fn shuffle_epi32(a: __m512i, imm: i32) -> __m512i {
        constify_imm8!(imm, I => _mm512_shuffle_epi32::<I>(a))
    }

    #[inline(always)]
    pub(crate) unsafe fn shufflelo_epi16(a: __m512i, imm: i32) -> __m512i {
        constify_imm8!(imm, I => _mm512_shufflelo_epi16::<I>(a))
    }

    #[inline(always)]
    pub(crate) unsafe fn shufflehi_epi16(a: __m512i, imm: i32) -> __m512i {
        constify_imm8!(imm, I => _mm512_shufflehi_epi16::<I>(a))
    }

    #[inline(always)]
    pub(crate) unsafe fn permutex_epi64(a: __m512i, imm: i32) -> __m512i {
        constify_imm8!(imm, I => _mm512_permutex_epi64::<I>(a))
    }
}
