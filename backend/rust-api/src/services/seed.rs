//! Starting content of a fresh editor workspace: the "Two Sum" problem and three
//! reference solutions.

use crate::models::{
    problem::{Category, Difficulty, Problem},
    solution_file::{Language, SolutionFile},
};

const TWO_SUM_DESCRIPTION: &str = r#"# Two Sum

Given an array of integers `nums` and an integer `target`, return *indices of the two numbers such that they add up to `target`*.

You may assume that each input would have ***exactly* one solution**, and you may not use the *same* element twice.

You can return the answer in any order.

## Example 1:
```
Input: nums = [2,7,11,15], target = 9
Output: [0,1]
Explanation: Because nums[0] + nums[1] == 9, we return [0, 1].
```

## Example 2:
```
Input: nums = [3,2,4], target = 6
Output: [1,2]
```

## Constraints:
- `2 <= nums.length <= 10^4`
- `-10^9 <= nums[i] <= 10^9`
- `-10^9 <= target <= 10^9`
- **Only one valid answer exists.**"#;

const TWO_SUM_TEST_CASES: &str = "// Test Case 1
Input: nums = [2,7,11,15], target = 9
Expected Output: [0,1]

// Test Case 2
Input: nums = [3,2,4], target = 6
Expected Output: [1,2]";

const JAVASCRIPT_SOLUTION: &str = "function twoSum(nums, target) {
    const map = new Map();

    for (let i = 0; i < nums.length; i++) {
        const complement = target - nums[i];

        if (map.has(complement)) {
            return [map.get(complement), i];
        }

        map.set(nums[i], i);
    }

    return [];
}

// Time Complexity: O(n)
// Space Complexity: O(n)";

const PYTHON_SOLUTION: &str = "def twoSum(nums, target):
    num_map = {}

    for i, num in enumerate(nums):
        complement = target - num

        if complement in num_map:
            return [num_map[complement], i]

        num_map[num] = i

    return []

# Time Complexity: O(n)
# Space Complexity: O(n)";

const JAVA_SOLUTION: &str = "public class Solution {
    public int[] twoSum(int[] nums, int target) {
        Map<Integer, Integer> map = new HashMap<>();

        for (int i = 0; i < nums.length; i++) {
            int complement = target - nums[i];

            if (map.containsKey(complement)) {
                return new int[] { map.get(complement), i };
            }

            map.put(nums[i], i);
        }

        return new int[] {};
    }
}

// Time Complexity: O(n)
// Space Complexity: O(n)";

pub fn seed_problem() -> Problem {
    Problem {
        title: "Two Sum".to_string(),
        difficulty: Difficulty::Easy,
        category: Category::Algorithms,
        tags: vec!["Array".to_string(), "Hash Table".to_string()],
        time_complexity: "O(n)".to_string(),
        space_complexity: "O(n)".to_string(),
        hints: "Try using a hash map to store the numbers you've seen.\n\
                For each number, check if its complement exists in the hash map."
            .to_string(),
        follow_up: "Can you solve this in one pass?\nWhat if the array is sorted?".to_string(),
        description: TWO_SUM_DESCRIPTION.to_string(),
        test_cases: TWO_SUM_TEST_CASES.to_string(),
    }
}

pub fn seed_files() -> Vec<SolutionFile> {
    let file = |id: &str, name: &str, language, content: &str, saved| SolutionFile {
        id: id.to_string(),
        name: name.to_string(),
        language,
        content: content.to_string(),
        saved,
    };

    vec![
        file("1", "solution.js", Language::Javascript, JAVASCRIPT_SOLUTION, true),
        file("2", "solution.py", Language::Python, PYTHON_SOLUTION, true),
        file("3", "solution.java", Language::Java, JAVA_SOLUTION, false),
    ]
}
