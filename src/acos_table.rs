//! Arccosine lookup table, generated offline.
//!
//! Entry `i` holds `acos(i / 1024)` in tenths of a degree, rounded to the
//! nearest tenth. 1024 entries cover the [0, 1) cosine domain; inputs of
//! exactly 1.0 (and beyond) are clamped by the caller before lookup.

pub(crate) const ACOS_TABLE: [i16; 1024] = [
    900, 899, 899, 898, 898, 897, 897, 896,
    896, 895, 894, 894, 893, 893, 892, 892,
    891, 890, 890, 889, 889, 888, 888, 887,
    887, 886, 885, 885, 884, 884, 883, 883,
    882, 882, 881, 880, 880, 879, 879, 878,
    878, 877, 876, 876, 875, 875, 874, 874,
    873, 873, 872, 871, 871, 870, 870, 869,
    869, 868, 868, 867, 866, 866, 865, 865,
    864, 864, 863, 862, 862, 861, 861, 860,
    860, 859, 859, 858, 857, 857, 856, 856,
    855, 855, 854, 854, 853, 852, 852, 851,
    851, 850, 850, 849, 848, 848, 847, 847,
    846, 846, 845, 845, 844, 843, 843, 842,
    842, 841, 841, 840, 839, 839, 838, 838,
    837, 837, 836, 836, 835, 834, 834, 833,
    833, 832, 832, 831, 830, 830, 829, 829,
    828, 828, 827, 827, 826, 825, 825, 824,
    824, 823, 823, 822, 821, 821, 820, 820,
    819, 819, 818, 817, 817, 816, 816, 815,
    815, 814, 814, 813, 812, 812, 811, 811,
    810, 810, 809, 808, 808, 807, 807, 806,
    806, 805, 804, 804, 803, 803, 802, 802,
    801, 800, 800, 799, 799, 798, 798, 797,
    796, 796, 795, 795, 794, 794, 793, 793,
    792, 791, 791, 790, 790, 789, 789, 788,
    787, 787, 786, 786, 785, 785, 784, 783,
    783, 782, 782, 781, 781, 780, 779, 779,
    778, 778, 777, 777, 776, 775, 775, 774,
    774, 773, 772, 772, 771, 771, 770, 770,
    769, 768, 768, 767, 767, 766, 766, 765,
    764, 764, 763, 763, 762, 762, 761, 760,
    760, 759, 759, 758, 758, 757, 756, 756,
    755, 755, 754, 753, 753, 752, 752, 751,
    751, 750, 749, 749, 748, 748, 747, 747,
    746, 745, 745, 744, 744, 743, 742, 742,
    741, 741, 740, 740, 739, 738, 738, 737,
    737, 736, 735, 735, 734, 734, 733, 733,
    732, 731, 731, 730, 730, 729, 728, 728,
    727, 727, 726, 726, 725, 724, 724, 723,
    723, 722, 721, 721, 720, 720, 719, 718,
    718, 717, 717, 716, 716, 715, 714, 714,
    713, 713, 712, 711, 711, 710, 710, 709,
    708, 708, 707, 707, 706, 705, 705, 704,
    704, 703, 703, 702, 701, 701, 700, 700,
    699, 698, 698, 697, 697, 696, 695, 695,
    694, 694, 693, 692, 692, 691, 691, 690,
    689, 689, 688, 688, 687, 686, 686, 685,
    685, 684, 683, 683, 682, 682, 681, 680,
    680, 679, 679, 678, 677, 677, 676, 676,
    675, 674, 674, 673, 672, 672, 671, 671,
    670, 669, 669, 668, 668, 667, 666, 666,
    665, 665, 664, 663, 663, 662, 662, 661,
    660, 660, 659, 658, 658, 657, 657, 656,
    655, 655, 654, 654, 653, 652, 652, 651,
    650, 650, 649, 649, 648, 647, 647, 646,
    646, 645, 644, 644, 643, 642, 642, 641,
    641, 640, 639, 639, 638, 637, 637, 636,
    636, 635, 634, 634, 633, 632, 632, 631,
    631, 630, 629, 629, 628, 627, 627, 626,
    626, 625, 624, 624, 623, 622, 622, 621,
    620, 620, 619, 619, 618, 617, 617, 616,
    615, 615, 614, 613, 613, 612, 612, 611,
    610, 610, 609, 608, 608, 607, 606, 606,
    605, 605, 604, 603, 603, 602, 601, 601,
    600, 599, 599, 598, 597, 597, 596, 595,
    595, 594, 594, 593, 592, 592, 591, 590,
    590, 589, 588, 588, 587, 586, 586, 585,
    584, 584, 583, 582, 582, 581, 580, 580,
    579, 578, 578, 577, 576, 576, 575, 574,
    574, 573, 572, 572, 571, 570, 570, 569,
    568, 568, 567, 566, 566, 565, 564, 564,
    563, 562, 562, 561, 560, 560, 559, 558,
    558, 557, 556, 556, 555, 554, 554, 553,
    552, 552, 551, 550, 550, 549, 548, 547,
    547, 546, 545, 545, 544, 543, 543, 542,
    541, 541, 540, 539, 539, 538, 537, 536,
    536, 535, 534, 534, 533, 532, 532, 531,
    530, 529, 529, 528, 527, 527, 526, 525,
    525, 524, 523, 522, 522, 521, 520, 520,
    519, 518, 517, 517, 516, 515, 515, 514,
    513, 512, 512, 511, 510, 510, 509, 508,
    507, 507, 506, 505, 505, 504, 503, 502,
    502, 501, 500, 499, 499, 498, 497, 496,
    496, 495, 494, 494, 493, 492, 491, 491,
    490, 489, 488, 488, 487, 486, 485, 485,
    484, 483, 482, 482, 481, 480, 479, 479,
    478, 477, 476, 476, 475, 474, 473, 473,
    472, 471, 470, 470, 469, 468, 467, 466,
    466, 465, 464, 463, 463, 462, 461, 460,
    459, 459, 458, 457, 456, 456, 455, 454,
    453, 452, 452, 451, 450, 449, 448, 448,
    447, 446, 445, 444, 444, 443, 442, 441,
    440, 440, 439, 438, 437, 436, 436, 435,
    434, 433, 432, 432, 431, 430, 429, 428,
    427, 427, 426, 425, 424, 423, 422, 422,
    421, 420, 419, 418, 417, 417, 416, 415,
    414, 413, 412, 412, 411, 410, 409, 408,
    407, 406, 406, 405, 404, 403, 402, 401,
    400, 400, 399, 398, 397, 396, 395, 394,
    393, 392, 392, 391, 390, 389, 388, 387,
    386, 385, 384, 384, 383, 382, 381, 380,
    379, 378, 377, 376, 375, 374, 374, 373,
    372, 371, 370, 369, 368, 367, 366, 365,
    364, 363, 362, 361, 360, 359, 359, 358,
    357, 356, 355, 354, 353, 352, 351, 350,
    349, 348, 347, 346, 345, 344, 343, 342,
    341, 340, 339, 338, 337, 336, 335, 334,
    333, 332, 331, 330, 329, 328, 327, 326,
    325, 324, 323, 321, 320, 319, 318, 317,
    316, 315, 314, 313, 312, 311, 310, 309,
    308, 306, 305, 304, 303, 302, 301, 300,
    299, 298, 296, 295, 294, 293, 292, 291,
    290, 288, 287, 286, 285, 284, 283, 281,
    280, 279, 278, 277, 275, 274, 273, 272,
    270, 269, 268, 267, 266, 264, 263, 262,
    260, 259, 258, 257, 255, 254, 253, 251,
    250, 249, 247, 246, 245, 243, 242, 241,
    239, 238, 236, 235, 234, 232, 231, 229,
    228, 227, 225, 224, 222, 221, 219, 218,
    216, 215, 213, 212, 210, 208, 207, 205,
    204, 202, 200, 199, 197, 195, 194, 192,
    190, 189, 187, 185, 183, 182, 180, 178,
    176, 174, 172, 170, 169, 167, 165, 163,
    161, 159, 157, 154, 152, 150, 148, 146,
    144, 141, 139, 137, 134, 132, 129, 127,
    124, 122, 119, 116, 113, 111, 108, 105,
    101, 98, 95, 91, 88, 84, 80, 76,
    72, 67, 62, 57, 51, 44, 36, 25,
];
